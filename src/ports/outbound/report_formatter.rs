use crate::application::read_models::HealthReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a health report
///
/// This port abstracts the output formats (JSON, Markdown, CSV) over the
/// shared read model.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &HealthReportReadModel) -> Result<String>;
}
