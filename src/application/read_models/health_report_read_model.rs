//! Health report read model for query operations
//!
//! This module provides the main read model struct that every report
//! formatter renders.

use super::component_view::ComponentRowView;
use crate::health_analysis::domain::HealthSummary;
use serde::Serialize;

/// Main read model for a library health report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportReadModel {
    pub metadata: ReportMetadataView,
    pub summary: HealthSummary,
    /// One row per component group, in document order
    pub components: Vec<ComponentRowView>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    /// `urn:uuid:` identifier unique to this report
    pub report_id: String,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub file_name: String,
    pub is_library_file: bool,
    /// Records dropped because they had no name
    pub skipped_unnamed: usize,
    /// `None` when contrast analysis was disabled
    pub contrast_analysis: Option<ContrastAnalysisView>,
}

/// Counters of the thumbnail contrast analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastAnalysisView {
    pub thumbnails_attempted: usize,
    pub thumbnails_analyzed: usize,
    pub thumbnails_failed: usize,
}
