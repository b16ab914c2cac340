use crate::application::read_models::{ComponentRowView, HealthReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const HEADER: [&str; 8] = [
    "Component Name",
    "Type",
    "Instances",
    "Health Score",
    "Status",
    "Description",
    "Variants",
    "Page",
];

/// CsvFormatter adapter writing one row per component group
///
/// Fields are quoted per RFC 4180 only when they contain a comma, a quote
/// or a line break.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn render_row(output: &mut String, fields: &[String]) {
        let escaped: Vec<String> = fields.iter().map(|f| Self::escape_field(f)).collect();
        output.push_str(&escaped.join(","));
        output.push('\n');
    }

    fn row_fields(row: &ComponentRowView) -> Vec<String> {
        vec![
            row.name.clone(),
            row.component_type.clone(),
            row.instances.to_string(),
            format!("{}%", row.health_score),
            row.status.to_string(),
            row.description.clone(),
            row.variant_count.to_string(),
            row.page.clone().unwrap_or_default(),
        ]
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, model: &HealthReportReadModel) -> Result<String> {
        let mut output = String::new();
        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        Self::render_row(&mut output, &header);

        for row in &model.components {
            Self::render_row(&mut output, &Self::row_fields(row));
        }
        Ok(output)
    }
}
