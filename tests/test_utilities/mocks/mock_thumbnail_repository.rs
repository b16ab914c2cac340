use async_trait::async_trait;
use figma_health::health_analysis::domain::ThumbnailImage;
use figma_health::prelude::*;
use figma_health::shared::error::ContrastError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Two-pixel image with one black and one white pixel
pub fn black_and_white_thumbnail() -> ThumbnailImage {
    ThumbnailImage::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap()
}

/// Mock ThumbnailRepository serving registered images; other URLs fail with 404
#[derive(Clone, Default)]
pub struct MockThumbnailRepository {
    images: HashMap<String, ThumbnailImage>,
    call_count: Arc<AtomicUsize>,
}

impl MockThumbnailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, url: &str, image: ThumbnailImage) -> Self {
        self.images.insert(url.to_string(), image);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThumbnailRepository for MockThumbnailRepository {
    async fn fetch_thumbnail(&self, url: &str) -> std::result::Result<ThumbnailImage, ContrastError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| ContrastError::ImageLoad {
                url: url.to_string(),
                details: "status code 404 Not Found".to_string(),
            })
    }
}
