use crate::health_analysis::domain::ThumbnailImage;
use crate::ports::outbound::ThumbnailRepository;
use crate::shared::error::ContrastError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingThumbnailRepository wraps a ThumbnailRepository with a per-URL cache.
///
/// Both outcomes are cached, so a URL that failed once is not downloaded
/// again within the same run. Variants of a component set frequently share
/// one rendered thumbnail.
pub struct CachingThumbnailRepository<R: ThumbnailRepository> {
    inner: R,
    cache: Arc<DashMap<String, Result<ThumbnailImage, ContrastError>>>,
}

impl<R: ThumbnailRepository> CachingThumbnailRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ThumbnailRepository> ThumbnailRepository for CachingThumbnailRepository<R> {
    async fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ContrastError> {
        if let Some(cached) = self.cache.get(url) {
            return cached.clone();
        }

        let outcome = self.inner.fetch_thumbnail(url).await;
        self.cache.insert(url.to_string(), outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a 1x1 image for URLs ending in .png and fails otherwise
    struct CountingRepository {
        call_count: AtomicUsize,
    }

    impl CountingRepository {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ThumbnailRepository for CountingRepository {
        async fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ContrastError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if url.ends_with(".png") {
                Ok(ThumbnailImage::new(1, 1, vec![1, 2, 3, 255]).unwrap())
            } else {
                Err(ContrastError::ImageLoad {
                    url: url.to_string(),
                    details: "unsupported".to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn test_returns_cached_image() {
        let caching = CachingThumbnailRepository::new(CountingRepository::new());

        let first = caching.fetch_thumbnail("https://x/a.png").await.unwrap();
        let second = caching.fetch_thumbnail("https://x/a.png").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(caching.inner.get_call_count(), 1);
        assert_eq!(caching.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_cached_too() {
        let caching = CachingThumbnailRepository::new(CountingRepository::new());

        assert!(caching.fetch_thumbnail("https://x/a.svg").await.is_err());
        assert!(caching.fetch_thumbnail("https://x/a.svg").await.is_err());

        assert_eq!(caching.inner.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_distinct_urls_cached_separately() {
        let caching = CachingThumbnailRepository::new(CountingRepository::new());

        caching.fetch_thumbnail("https://x/a.png").await.unwrap();
        caching.fetch_thumbnail("https://x/b.png").await.unwrap();

        assert_eq!(caching.inner.get_call_count(), 2);
        assert_eq!(caching.cache_size(), 2);
    }
}
