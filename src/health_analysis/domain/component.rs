use super::contrast::ContrastResult;
use crate::health_analysis::policies::ScoreRule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of Figma node a record was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "COMPONENT")]
    Component,
    #[serde(rename = "COMPONENT_SET")]
    ComponentSet,
}

impl ComponentType {
    /// Label used by the tabular report formats
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Component => "Component",
            ComponentType::ComponentSet => "Component Set",
        }
    }
}

/// Rendered size of a component. Zero or negative dimensions signal a broken layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_broken(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One Figma component or component-set node, as fetched for a single analysis run.
///
/// Records are never mutated after extraction; scoring and grouping produce
/// new derived values. `is_deprecated` is decided once by the extractor and
/// the scorer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub is_orphaned: bool,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_library_file: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Name of the enclosing component set, for set members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_set: Option<String>,
}

impl ComponentRecord {
    pub fn new(name: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            component_type,
            bounding_box: None,
            is_deprecated: false,
            is_orphaned: false,
            usage_count: 0,
            thumbnail_url: None,
            is_library_file: false,
            last_modified: None,
            page: None,
            component_set: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_bounding_box(mut self, width: f64, height: f64) -> Self {
        self.bounding_box = Some(BoundingBox::new(width, height));
        self
    }

    pub fn with_deprecated(mut self, is_deprecated: bool) -> Self {
        self.is_deprecated = is_deprecated;
        self
    }

    /// Sets the instance count; a count of zero marks the record orphaned.
    pub fn with_usage_count(mut self, usage_count: u32) -> Self {
        self.usage_count = usage_count;
        self.is_orphaned = usage_count == 0;
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_library_file(mut self, is_library_file: bool) -> Self {
        self.is_library_file = is_library_file;
        self
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_component_set(mut self, set_name: impl Into<String>) -> Self {
        self.component_set = Some(set_name.into());
        self
    }

    /// Name used to place the record in its group: set members are
    /// qualified as `"<set> / <name>"`, everything else uses its own name.
    pub fn grouping_name(&self) -> String {
        match &self.component_set {
            Some(set_name) => format!("{} / {}", set_name, self.name),
            None => self.name.clone(),
        }
    }

    /// Thumbnail URL if present and non-empty
    pub fn usable_thumbnail(&self) -> Option<&str> {
        self.thumbnail_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// A record enriched with its health score and optional contrast analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredComponent {
    #[serde(flatten)]
    pub record: ComponentRecord,
    pub health_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_result: Option<ContrastResult>,
    /// Rules that produced `health_score`, in checklist order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_rules: Vec<ScoreRule>,
}

impl ScoredComponent {
    pub fn new(
        record: ComponentRecord,
        health_score: u8,
        contrast_result: Option<ContrastResult>,
    ) -> Self {
        Self {
            record,
            health_score,
            contrast_result,
            applied_rules: Vec::new(),
        }
    }

    pub fn with_applied_rules(mut self, applied_rules: Vec<ScoreRule>) -> Self {
        self.applied_rules = applied_rules;
        self
    }

    /// Deductions among the applied rules
    pub fn issues(&self) -> impl Iterator<Item = &ScoreRule> {
        self.applied_rules.iter().filter(|rule| !rule.is_bonus())
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}
