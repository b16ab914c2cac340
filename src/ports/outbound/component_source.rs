use crate::health_analysis::domain::LibrarySnapshot;
use crate::shared::Result;
use async_trait::async_trait;

/// ComponentSource port for acquiring the component records of one Figma file
///
/// Adapters are constructed with their target (a file key for the REST API,
/// a path for a saved file response) and fetch it once per analysis run.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the use case can hold them
/// across await points.
#[async_trait]
pub trait ComponentSource: Send + Sync {
    /// Fetches every component and component set of the file
    ///
    /// # Returns
    /// A snapshot with the file name, the library-file flag and one
    /// `ComponentRecord` per component or component-set node
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be fetched or read
    /// - The response is not a Figma file document
    async fn fetch_library(&self) -> Result<LibrarySnapshot>;

    /// Short label for progress output, e.g. the file key or input path
    fn describe(&self) -> String;
}
