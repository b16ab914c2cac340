use crate::application::dto::ContrastSettings;
use crate::health_analysis::domain::ContrastResult;
use crate::health_analysis::services::ColorContrastAnalyzer;
use crate::ports::outbound::ThumbnailRepository;
use crate::shared::error::ContrastError;
use futures::future::join_all;
use indexmap::IndexSet;
use std::collections::HashMap;

/// Contrast outcome per thumbnail URL
pub type ContrastOutcomes = HashMap<String, Result<ContrastResult, ContrastError>>;

/// AnalyzeContrastUseCase - Thumbnail download and contrast analysis
///
/// URLs are deduplicated, then fetched in batches of
/// `ContrastSettings::batch_size` with a bounded timeout per fetch and a
/// short pause between batches. A failed or timed-out thumbnail yields an
/// `ImageLoad` outcome for that URL only.
///
/// # Type Parameters
/// * `R` - ThumbnailRepository implementation
pub struct AnalyzeContrastUseCase<R: ThumbnailRepository> {
    thumbnail_repository: R,
}

impl<R: ThumbnailRepository> AnalyzeContrastUseCase<R> {
    pub fn new(thumbnail_repository: R) -> Self {
        Self {
            thumbnail_repository,
        }
    }

    /// Analyzes every distinct URL, calling `on_progress(done, total)` after each batch
    pub async fn analyze_urls<I>(
        &self,
        urls: I,
        settings: &ContrastSettings,
        on_progress: &mut dyn FnMut(usize, usize),
    ) -> ContrastOutcomes
    where
        I: IntoIterator<Item = String>,
    {
        let unique: Vec<String> = urls.into_iter().collect::<IndexSet<_>>().into_iter().collect();
        let total = unique.len();
        let batch_size = settings.batch_size.max(1);
        let mut outcomes = ContrastOutcomes::with_capacity(total);

        for (index, batch) in unique.chunks(batch_size).enumerate() {
            if index > 0 && !settings.batch_pause.is_zero() {
                tokio::time::sleep(settings.batch_pause).await;
            }

            let results = join_all(batch.iter().map(|url| self.analyze_one(url, settings))).await;
            outcomes.extend(batch.iter().cloned().zip(results));
            on_progress(outcomes.len(), total);
        }

        outcomes
    }

    #[cfg(test)]
    pub(crate) fn thumbnail_repository(&self) -> &R {
        &self.thumbnail_repository
    }

    async fn analyze_one(
        &self,
        url: &str,
        settings: &ContrastSettings,
    ) -> Result<ContrastResult, ContrastError> {
        let fetch = self.thumbnail_repository.fetch_thumbnail(url);
        let image = tokio::time::timeout(settings.thumbnail_timeout, fetch)
            .await
            .map_err(|_| ContrastError::ImageLoad {
                url: url.to_string(),
                details: format!(
                    "timed out after {}s",
                    settings.thumbnail_timeout.as_secs_f64()
                ),
            })??;

        ColorContrastAnalyzer::analyze(&image)
    }
}
