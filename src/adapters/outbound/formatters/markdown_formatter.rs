use crate::application::read_models::{
    ComponentRowView, HealthReportReadModel, IssueView, ReportMetadataView,
};
use crate::health_analysis::domain::HealthSummary;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the component inventory
const TABLE_HEADER: &str = "| Component | Type | Instances | Health | Status | Variants | Page |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|------|-----------|--------|--------|----------|------|\n";

/// MarkdownFormatter adapter for a human-readable health report
///
/// Renders the summary, a component inventory table and the deductions per
/// component (and per variant for component sets).
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn health_indicator(score: u8) -> &'static str {
        match score {
            80..=100 => "🟢",
            50..=79 => "🟡",
            _ => "🔴",
        }
    }

    fn format_issue(issue: &IssueView) -> String {
        format!("{} ({})", issue.description, issue.points)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str("# Figma Component Health Report\n\n");
        output.push_str(&format!(
            "- **File:** {} ({})\n",
            metadata.file_name,
            if metadata.is_library_file {
                "library file"
            } else {
                "working file"
            }
        ));
        output.push_str(&format!("- **Generated:** {}\n", metadata.generated_at));
        output.push_str(&format!(
            "- **Tool:** {} {}\n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!("- **Report ID:** {}\n\n", metadata.report_id));
    }

    fn render_summary(
        &self,
        output: &mut String,
        summary: &HealthSummary,
        metadata: &ReportMetadataView,
    ) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Average health score | {} {}% |\n",
            Self::health_indicator(summary.average_health_score),
            summary.average_health_score
        ));
        output.push_str(&format!("| Components | {} |\n", summary.total_components));
        output.push_str(&format!("| Component sets | {} |\n", summary.component_sets));
        output.push_str(&format!("| Well documented | {} |\n", summary.well_documented));
        output.push_str(&format!("| Deprecated | {} |\n", summary.deprecated_components));
        output.push_str(&format!(
            "| Updated in the last 30 days | {} |\n",
            summary.recent_updates
        ));
        if let Some(contrast) = &metadata.contrast_analysis {
            output.push_str(&format!(
                "| Thumbnails analyzed for contrast | {} of {} |\n",
                contrast.thumbnails_analyzed, contrast.thumbnails_attempted
            ));
        }
        output.push('\n');
    }

    fn render_components(&self, output: &mut String, components: &[ComponentRowView]) {
        output.push_str("## Components\n\n");
        if components.is_empty() {
            output.push_str("*No components*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} {}% | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.name),
                component.component_type,
                component.instances,
                Self::health_indicator(component.health_score),
                component.health_score,
                component.status,
                component.variant_count,
                Self::escape_markdown_table_cell(component.page.as_deref().unwrap_or("")),
            ));
        }
        output.push('\n');
    }

    fn render_issues(&self, output: &mut String, components: &[ComponentRowView]) {
        output.push_str("## Issues\n\n");

        let mut any_issue = false;
        for component in components {
            let has_variant_issues = component.variants.iter().any(|v| !v.issues.is_empty());
            if component.issues.is_empty() && !has_variant_issues {
                continue;
            }
            any_issue = true;

            output.push_str(&format!("### {}\n\n", component.name));
            for issue in &component.issues {
                output.push_str(&format!("- {}\n", Self::format_issue(issue)));
            }
            for variant in component.variants.iter().filter(|v| !v.issues.is_empty()) {
                let issues: Vec<String> = variant.issues.iter().map(Self::format_issue).collect();
                output.push_str(&format!("- **{}**: {}\n", variant.name, issues.join("; ")));
            }
            output.push('\n');
        }

        if !any_issue {
            output.push_str("*No issues found*\n");
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &HealthReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_summary(&mut output, &model.summary, &model.metadata);
        self.render_components(&mut output, &model.components);
        self.render_issues(&mut output, &model.components);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_fixtures::create_test_read_model;
    use crate::application::read_models::ContrastAnalysisView;

    fn formatted() -> String {
        MarkdownFormatter::new()
            .format(&create_test_read_model())
            .unwrap()
    }

    #[test]
    fn test_header() {
        let output = formatted();
        assert!(output.starts_with("# Figma Component Health Report\n\n"));
        assert!(output.contains("- **File:** Design System (library file)\n"));
        assert!(output.contains("- **Generated:** 2024-06-01T12:00:00Z\n"));
    }

    #[test]
    fn test_summary_table() {
        let output = formatted();
        assert!(output.contains("| Average health score | 🟡 58% |\n"));
        assert!(output.contains("| Deprecated | 1 |\n"));
        assert!(!output.contains("Thumbnails analyzed"));
    }

    #[test]
    fn test_summary_includes_contrast_counters() {
        let mut model = create_test_read_model();
        model.metadata.contrast_analysis = Some(ContrastAnalysisView {
            thumbnails_attempted: 4,
            thumbnails_analyzed: 3,
            thumbnails_failed: 1,
        });
        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("| Thumbnails analyzed for contrast | 3 of 4 |\n"));
    }

    #[test]
    fn test_component_table() {
        let output = formatted();
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| Button | Component Set | 5 | 🟢 85% | Active | 2 | Actions |\n"));
        assert!(output.contains("| _Legacy Card | Component | 0 | 🔴 30% | Deprecated | 0 |  |\n"));
    }

    #[test]
    fn test_issues_per_component_and_variant() {
        let output = formatted();
        assert!(output.contains(
            "### Button\n\n- **State=Disabled**: Thumbnail is missing or a placeholder (-10)\n"
        ));
        assert!(output.contains(
            "### _Legacy Card\n\n- Component is deprecated (-50)\n- No instances in this file (-30)\n"
        ));
    }

    #[test]
    fn test_no_issues() {
        let mut model = create_test_read_model();
        model.components.iter_mut().for_each(|c| {
            c.issues.clear();
            c.variants.iter_mut().for_each(|v| v.issues.clear());
        });
        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.ends_with("## Issues\n\n*No issues found*\n"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
