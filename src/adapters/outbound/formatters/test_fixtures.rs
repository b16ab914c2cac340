use crate::application::read_models::{
    ComponentRowView, ComponentStatus, ContrastView, HealthReportReadModel, IssueView,
    ReportMetadataView, VariantView,
};
use crate::health_analysis::domain::HealthSummary;
use crate::health_analysis::policies::ScoreRule;

/// A set with two variants and a deprecated standalone component
pub(crate) fn create_test_read_model() -> HealthReportReadModel {
    HealthReportReadModel {
        metadata: ReportMetadataView {
            report_id: "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
            generated_at: "2024-06-01T12:00:00Z".to_string(),
            tool_name: "figma-health".to_string(),
            tool_version: "0.1.0".to_string(),
            file_name: "Design System".to_string(),
            is_library_file: true,
            skipped_unnamed: 0,
            contrast_analysis: None,
        },
        summary: HealthSummary {
            total_components: 2,
            well_documented: 2,
            deprecated_components: 1,
            recent_updates: 0,
            component_sets: 1,
            average_health_score: 58,
        },
        components: vec![
            ComponentRowView {
                name: "Button".to_string(),
                component_type: "Component Set".to_string(),
                instances: 5,
                health_score: 85,
                status: ComponentStatus::Active,
                description: "Primary action, use once per view".to_string(),
                variant_count: 2,
                page: Some("Actions".to_string()),
                thumbnail_url: None,
                last_modified: None,
                contrast: None,
                issues: Vec::new(),
                variants: vec![
                    VariantView {
                        name: "State=Default".to_string(),
                        instances: 3,
                        health_score: 90,
                        status: ComponentStatus::Active,
                        contrast: Some(ContrastView {
                            dominant_colors: vec!["#000000".to_string(), "#ffffff".to_string()],
                            min_contrast: 21.0,
                            max_contrast: 21.0,
                            avg_contrast: 21.0,
                            level: "AAA".to_string(),
                        }),
                        issues: Vec::new(),
                    },
                    VariantView {
                        name: "State=Disabled".to_string(),
                        instances: 2,
                        health_score: 80,
                        status: ComponentStatus::Active,
                        contrast: None,
                        issues: vec![IssueView::from(&ScoreRule::MissingThumbnail)],
                    },
                ],
            },
            ComponentRowView {
                name: "_Legacy Card".to_string(),
                component_type: "Component".to_string(),
                instances: 0,
                health_score: 30,
                status: ComponentStatus::Deprecated,
                description: "Deprecated, say \"Card\" instead".to_string(),
                variant_count: 0,
                page: None,
                thumbnail_url: None,
                last_modified: None,
                contrast: None,
                issues: vec![
                    IssueView::from(&ScoreRule::Deprecated),
                    IssueView::from(&ScoreRule::UnusedInFile),
                ],
                variants: Vec::new(),
            },
        ],
    }
}
