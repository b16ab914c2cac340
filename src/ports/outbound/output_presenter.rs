use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// This port abstracts the destination (stdout, file) of the formatted report.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - The destination is a symlink or its directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
