use crate::health_analysis::domain::HealthSummary;
use crate::health_analysis::services::ComponentGroups;

/// Outcome counters of the thumbnail contrast analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContrastStats {
    /// Distinct thumbnail URLs attempted
    pub attempted: usize,
    pub analyzed: usize,
    pub failed: usize,
}

/// AnalysisResponse - Internal response DTO of the library analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub file_name: String,
    pub is_library_file: bool,
    pub groups: ComponentGroups,
    pub summary: HealthSummary,
    /// Records dropped because they had no name
    pub skipped_unnamed: usize,
    /// `None` when contrast analysis was disabled
    pub contrast_stats: Option<ContrastStats>,
}
