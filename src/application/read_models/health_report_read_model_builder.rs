//! Builder for constructing HealthReportReadModel from analysis results

use super::component_view::{
    ComponentRowView, ComponentStatus, ContrastView, IssueView, VariantView,
};
use super::health_report_read_model::{
    ContrastAnalysisView, HealthReportReadModel, ReportMetadataView,
};
use crate::application::dto::AnalysisResponse;
use crate::health_analysis::domain::{
    ComponentGroup, ContrastResult, ContrastTier, ScoredComponent,
};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Builder for constructing HealthReportReadModel from an AnalysisResponse
pub struct HealthReportReadModelBuilder;

impl HealthReportReadModelBuilder {
    /// Builds the read model with a fresh report id and the current time
    pub fn build(response: &AnalysisResponse) -> HealthReportReadModel {
        Self::build_with(response, Uuid::new_v4(), Utc::now())
    }

    /// Builds the read model with a fixed id and timestamp
    pub fn build_with(
        response: &AnalysisResponse,
        report_id: Uuid,
        generated_at: DateTime<Utc>,
    ) -> HealthReportReadModel {
        HealthReportReadModel {
            metadata: Self::build_metadata(response, report_id, generated_at),
            summary: response.summary,
            components: response.groups.values().map(Self::build_row).collect(),
        }
    }

    fn build_metadata(
        response: &AnalysisResponse,
        report_id: Uuid,
        generated_at: DateTime<Utc>,
    ) -> ReportMetadataView {
        ReportMetadataView {
            report_id: format!("urn:uuid:{}", report_id),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            file_name: response.file_name.clone(),
            is_library_file: response.is_library_file,
            skipped_unnamed: response.skipped_unnamed,
            contrast_analysis: response.contrast_stats.map(|stats| ContrastAnalysisView {
                thumbnails_attempted: stats.attempted,
                thumbnails_analyzed: stats.analyzed,
                thumbnails_failed: stats.failed,
            }),
        }
    }

    fn build_row(group: &ComponentGroup) -> ComponentRowView {
        let base = &group.base;
        let record = &base.record;

        // A group's score is the mean of its variants, so only standalone
        // components list their own deductions.
        let issues = if group.has_variants() {
            Vec::new()
        } else {
            Self::build_issues(base)
        };

        ComponentRowView {
            name: group.base_name.clone(),
            component_type: record.component_type.label().to_string(),
            instances: record.usage_count,
            health_score: base.health_score,
            status: ComponentStatus::from_flags(record.is_deprecated, record.is_orphaned),
            description: record.description.clone(),
            variant_count: group.variant_count(),
            page: record.page.clone(),
            thumbnail_url: record.usable_thumbnail().map(str::to_string),
            last_modified: record
                .last_modified
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            contrast: base.contrast_result.as_ref().map(Self::build_contrast),
            issues,
            variants: group.variants.iter().map(Self::build_variant).collect(),
        }
    }

    fn build_variant(variant: &ScoredComponent) -> VariantView {
        let record = &variant.record;

        // The grouper already reduced the record name to its variant part
        VariantView {
            name: record.name.clone(),
            instances: record.usage_count,
            health_score: variant.health_score,
            status: ComponentStatus::from_flags(record.is_deprecated, record.is_orphaned),
            contrast: variant.contrast_result.as_ref().map(Self::build_contrast),
            issues: Self::build_issues(variant),
        }
    }

    fn build_issues(component: &ScoredComponent) -> Vec<IssueView> {
        component.issues().map(IssueView::from).collect()
    }

    fn build_contrast(result: &ContrastResult) -> ContrastView {
        let level = match result.tier() {
            Some(ContrastTier::Aaa) => "AAA",
            Some(ContrastTier::Aa) => "AA",
            Some(ContrastTier::AaLarge) => "AA Large",
            Some(ContrastTier::Fail) | None => "Fail",
        };

        ContrastView {
            dominant_colors: result.dominant_colors.iter().map(|c| c.to_hex()).collect(),
            min_contrast: round_ratio(result.min_contrast),
            max_contrast: round_ratio(result.max_contrast),
            avg_contrast: round_ratio(result.avg_contrast),
            level: level.to_string(),
        }
    }
}

/// Two decimals, as contrast ratios are usually quoted
fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
