use serde::{Deserialize, Serialize};

/// File-level statistics computed over base components (one per group)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub total_components: usize,
    pub well_documented: usize,
    pub deprecated_components: usize,
    pub recent_updates: usize,
    pub component_sets: usize,
    pub average_health_score: u8,
}
