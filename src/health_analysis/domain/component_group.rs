use super::component::ScoredComponent;
use serde::Serialize;

/// A base component together with the variants that share its name prefix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentGroup {
    pub base_name: String,
    /// Synthetic entry representing the whole group; its score, usage,
    /// deprecation and orphan flags are aggregated from `variants`.
    pub base: ScoredComponent,
    pub variants: Vec<ScoredComponent>,
}

impl ComponentGroup {
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}
