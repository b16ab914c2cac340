use crate::health_analysis::domain::ThumbnailImage;
use crate::shared::error::ContrastError;
use async_trait::async_trait;

/// ThumbnailRepository port for loading rendered component thumbnails
///
/// Implementations download and decode the image behind a thumbnail URL.
/// Every failure is reported as `ContrastError::ImageLoad` so callers can
/// skip the contrast adjustment and carry on.
#[async_trait]
pub trait ThumbnailRepository: Send + Sync {
    /// Fetches and decodes the thumbnail at `url` into an RGBA buffer
    ///
    /// # Errors
    /// Returns `ContrastError::ImageLoad` if the URL is rejected, the request
    /// fails, the body is too large or the image cannot be decoded.
    async fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ContrastError>;
}
