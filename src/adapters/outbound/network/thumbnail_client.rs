use crate::health_analysis::domain::ThumbnailImage;
use crate::ports::outbound::ThumbnailRepository;
use crate::shared::error::ContrastError;
use crate::shared::security::{validate_remote_url, MAX_THUMBNAIL_BYTES};
use async_trait::async_trait;
use std::time::Duration;

/// HttpThumbnailRepository adapter downloading and decoding rendered thumbnails
///
/// PNG and JPEG bodies are decoded with the `image` crate into RGBA8. Bodies
/// larger than `MAX_THUMBNAIL_BYTES` are rejected before decoding.
pub struct HttpThumbnailRepository {
    client: reqwest::Client,
}

impl HttpThumbnailRepository {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new() -> crate::shared::Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("figma-health/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, String> {
        validate_remote_url(url).map_err(|e| e.to_string())?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("status code {}", response.status()));
        }
        if response
            .content_length()
            .is_some_and(|length| length > MAX_THUMBNAIL_BYTES as u64)
        {
            return Err(format!(
                "thumbnail exceeds {} bytes",
                MAX_THUMBNAIL_BYTES
            ));
        }

        let body = response.bytes().await.map_err(|e| e.to_string())?;
        if body.len() > MAX_THUMBNAIL_BYTES {
            return Err(format!("thumbnail exceeds {} bytes", MAX_THUMBNAIL_BYTES));
        }
        Ok(body.to_vec())
    }
}

/// Decodes PNG or JPEG bytes into an RGBA8 thumbnail
pub fn decode_thumbnail(bytes: &[u8]) -> Result<ThumbnailImage, String> {
    let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    ThumbnailImage::new(width, height, rgba.into_raw()).map_err(|e| e.to_string())
}

#[async_trait]
impl ThumbnailRepository for HttpThumbnailRepository {
    async fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ContrastError> {
        let image_load = |details: String| ContrastError::ImageLoad {
            url: url.to_string(),
            details,
        };

        let bytes = self.download(url).await.map_err(image_load)?;
        decode_thumbnail(&bytes).map_err(image_load)
    }
}
