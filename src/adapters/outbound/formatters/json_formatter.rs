use crate::application::read_models::HealthReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the full report as camelCase JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &HealthReportReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_fixtures::create_test_read_model;
    use serde_json::Value;

    fn formatted() -> Value {
        let output = JsonFormatter::new()
            .format(&create_test_read_model())
            .unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_metadata_and_summary_are_camel_case() {
        let json = formatted();
        assert_eq!(json["metadata"]["fileName"], "Design System");
        assert_eq!(json["metadata"]["isLibraryFile"], true);
        assert_eq!(json["summary"]["totalComponents"], 2);
        assert_eq!(json["summary"]["averageHealthScore"], 58);
    }

    #[test]
    fn test_components_carry_variants_and_issues() {
        let json = formatted();
        let button = &json["components"][0];
        assert_eq!(button["name"], "Button");
        assert_eq!(button["componentType"], "Component Set");
        assert_eq!(button["variants"][0]["name"], "State=Default");
        assert_eq!(button["variants"][0]["contrast"]["level"], "AAA");

        let legacy = &json["components"][1];
        assert_eq!(legacy["status"], "Deprecated");
        assert_eq!(legacy["issues"][0]["rule"], "deprecated");
        assert_eq!(legacy["issues"][0]["severity"], "critical");
        assert_eq!(legacy["issues"][0]["points"], -50);
    }

    #[test]
    fn test_contrast_analysis_null_when_disabled() {
        let json = formatted();
        assert!(json["metadata"]["contrastAnalysis"].is_null());
    }
}
