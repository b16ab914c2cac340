use crate::application::dto::{AnalysisRequest, AnalysisResponse, ContrastStats};
use crate::application::use_cases::{AnalyzeContrastUseCase, ContrastOutcomes};
use crate::health_analysis::domain::{ComponentRecord, LibrarySnapshot, ScoredComponent};
use crate::health_analysis::services::{ComponentGrouper, HealthScorer, SummaryBuilder};
use crate::ports::outbound::{ComponentSource, ProgressReporter, ThumbnailRepository};
use crate::shared::error::ContrastError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// AnalyzeLibraryUseCase - Core use case for library health analysis
///
/// This use case orchestrates the analysis workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CS` - ComponentSource implementation
/// * `TR` - ThumbnailRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeLibraryUseCase<CS, TR, PR>
where
    TR: ThumbnailRepository,
{
    component_source: CS,
    contrast_use_case: AnalyzeContrastUseCase<TR>,
    progress_reporter: PR,
}

impl<CS, TR, PR> AnalyzeLibraryUseCase<CS, TR, PR>
where
    CS: ComponentSource,
    TR: ThumbnailRepository,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeLibraryUseCase with injected dependencies
    pub fn new(component_source: CS, thumbnail_repository: TR, progress_reporter: PR) -> Self {
        Self {
            component_source,
            contrast_use_case: AnalyzeContrastUseCase::new(thumbnail_repository),
            progress_reporter,
        }
    }

    /// Executes the analysis, using the current time for the recent-update window
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.execute_at(request, Utc::now()).await
    }

    /// Executes the analysis relative to `now`
    ///
    /// # Errors
    /// Returns an error if the component source fails or yields no named
    /// components.
    /// Thumbnail failures only produce warnings.
    pub async fn execute_at(
        &self,
        request: AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResponse> {
        // Step 1: Fetch component records
        let snapshot = self.fetch_snapshot(&request).await?;

        // Step 2: Contrast analysis if requested
        let (contrast_outcomes, contrast_stats) = if request.analyze_contrast {
            let outcomes = self.analyze_contrast(&snapshot.records, &request).await;
            let stats = self.report_contrast_outcomes(&outcomes);
            (outcomes, Some(stats))
        } else {
            (ContrastOutcomes::new(), None)
        };

        // Step 3: Score every record
        let scored = Self::score_records(snapshot.records, &contrast_outcomes);

        // Step 4: Group variants under their base component
        let grouped = ComponentGrouper::group(scored);
        if grouped.skipped_unnamed > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} component(s) without a name.",
                grouped.skipped_unnamed
            ));
        }
        if grouped.groups.is_empty() {
            anyhow::bail!(
                "No components found in {}. Every component record has a blank name.",
                self.component_source.describe()
            );
        }

        // Step 5: Summarize
        let summary = SummaryBuilder::summarize(grouped.groups.values(), now);
        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} component(s), average health score {}%",
            summary.total_components, summary.average_health_score
        ));

        Ok(AnalysisResponse {
            file_name: snapshot.file_name,
            is_library_file: snapshot.is_library_file,
            groups: grouped.groups,
            summary,
            skipped_unnamed: grouped.skipped_unnamed,
            contrast_stats,
        })
    }

    async fn fetch_snapshot(&self, request: &AnalysisRequest) -> Result<LibrarySnapshot> {
        let source = self.component_source.describe();
        self.progress_reporter
            .report(&format!("📖 Loading components from: {}", source));

        let mut snapshot = self.component_source.fetch_library().await?;
        if request.force_library {
            snapshot = snapshot.into_library();
        }

        if snapshot.records.is_empty() {
            anyhow::bail!(
                "No components found in {}. Only COMPONENT and COMPONENT_SET nodes are analyzed.",
                source
            );
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} component(s) in \"{}\"{}",
            snapshot.records.len(),
            snapshot.file_name,
            if snapshot.is_library_file {
                " (library file)"
            } else {
                ""
            }
        ));

        Ok(snapshot)
    }

    async fn analyze_contrast(
        &self,
        records: &[ComponentRecord],
        request: &AnalysisRequest,
    ) -> ContrastOutcomes {
        let urls: Vec<String> = records
            .iter()
            .filter_map(|record| record.usable_thumbnail().map(str::to_string))
            .collect();
        if urls.is_empty() {
            self.progress_reporter
                .report("ℹ️  No thumbnails available, skipping contrast analysis");
            return ContrastOutcomes::new();
        }

        self.progress_reporter
            .report("🎨 Analyzing thumbnail contrast...");
        let reporter = &self.progress_reporter;
        self.contrast_use_case
            .analyze_urls(urls, &request.contrast, &mut |done, total| {
                reporter.report_progress(done, total, Some("thumbnails"));
            })
            .await
    }

    /// Warns about every failed thumbnail and returns the counters
    fn report_contrast_outcomes(&self, outcomes: &ContrastOutcomes) -> ContrastStats {
        let mut failures: Vec<(&String, &ContrastError)> = outcomes
            .iter()
            .filter_map(|(url, outcome)| outcome.as_ref().err().map(|error| (url, error)))
            .collect();
        failures.sort_by(|a, b| a.0.cmp(b.0));

        for (url, error) in &failures {
            let message = match error {
                ContrastError::ImageLoad { .. } => format!("⚠️  Warning: {}", error),
                ContrastError::Analysis { .. } => format!("⚠️  Warning: {} ({})", error, url),
            };
            self.progress_reporter.report_error(&message);
        }

        let stats = ContrastStats {
            attempted: outcomes.len(),
            analyzed: outcomes.len() - failures.len(),
            failed: failures.len(),
        };
        if stats.attempted > 0 {
            self.progress_reporter.report(&format!(
                "✅ Contrast analyzed for {} of {} thumbnail(s)",
                stats.analyzed, stats.attempted
            ));
        }
        stats
    }

    fn score_records(
        records: Vec<ComponentRecord>,
        contrast_outcomes: &ContrastOutcomes,
    ) -> Vec<ScoredComponent> {
        records
            .into_iter()
            .map(|record| {
                let contrast = record
                    .usable_thumbnail()
                    .and_then(|url| contrast_outcomes.get(url))
                    .and_then(|outcome| outcome.as_ref().ok())
                    .cloned();
                HealthScorer::score_component(record, contrast)
            })
            .collect()
    }
}
