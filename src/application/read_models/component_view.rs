//! Component view structs for read model
//!
//! These structs provide a flattened, report-ready view of scored components.

use crate::health_analysis::policies::{RuleSeverity, ScoreRule};
use serde::Serialize;
use std::fmt;

/// Lifecycle status shown in the tabular reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentStatus {
    Active,
    Deprecated,
    Unused,
}

impl ComponentStatus {
    /// Deprecated wins over Unused, which wins over Active
    pub fn from_flags(is_deprecated: bool, is_orphaned: bool) -> Self {
        if is_deprecated {
            ComponentStatus::Deprecated
        } else if is_orphaned {
            ComponentStatus::Unused
        } else {
            ComponentStatus::Active
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComponentStatus::Active => "Active",
            ComponentStatus::Deprecated => "Deprecated",
            ComponentStatus::Unused => "Unused",
        };
        write!(f, "{}", label)
    }
}

/// View representation of one component group (a base plus its variants)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRowView {
    pub name: String,
    /// "Component" or "Component Set"
    pub component_type: String,
    pub instances: u32,
    pub health_score: u8,
    pub status: ComponentStatus,
    pub description: String,
    pub variant_count: usize,
    pub page: Option<String>,
    pub thumbnail_url: Option<String>,
    /// RFC 3339 timestamp of the last publish
    pub last_modified: Option<String>,
    pub contrast: Option<ContrastView>,
    /// Deductions of a standalone component; empty for groups with variants
    pub issues: Vec<IssueView>,
    pub variants: Vec<VariantView>,
}

/// View representation of a single variant inside a group
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantView {
    /// Name of the variant within its group, e.g. "State=Hover"
    pub name: String,
    pub instances: u32,
    pub health_score: u8,
    pub status: ComponentStatus,
    pub contrast: Option<ContrastView>,
    pub issues: Vec<IssueView>,
}

/// View representation of a thumbnail contrast analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastView {
    /// Dominant colors as `#rrggbb`
    pub dominant_colors: Vec<String>,
    pub min_contrast: f64,
    pub max_contrast: f64,
    pub avg_contrast: f64,
    /// "AAA", "AA", "AA Large" or "Fail"
    pub level: String,
}

/// One deduction applied by the health scorer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub rule: ScoreRule,
    pub severity: RuleSeverity,
    pub points: i32,
    pub description: String,
}

impl From<&ScoreRule> for IssueView {
    fn from(rule: &ScoreRule) -> Self {
        Self {
            rule: *rule,
            severity: rule.severity(),
            points: rule.points(),
            description: rule.description().to_string(),
        }
    }
}
