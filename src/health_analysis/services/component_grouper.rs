use super::summary_builder::round_half_up_mean;
use crate::health_analysis::domain::{ComponentGroup, ScoredComponent};
use indexmap::IndexMap;

/// Separators that encode a variant in a component name, by priority
const VARIANT_SEPARATORS: [&str; 2] = [" / ", "="];

/// Groups keyed by base name, in first-occurrence order
pub type ComponentGroups = IndexMap<String, ComponentGroup>;

/// Result of grouping a batch of scored components
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedComponents {
    pub groups: ComponentGroups,
    /// Records excluded because their name was empty
    pub skipped_unnamed: usize,
}

/// ComponentGrouper service rebuilding the base/variant hierarchy from names
pub struct ComponentGrouper;

impl ComponentGrouper {
    /// Groups components by base name.
    ///
    /// The grouping name (set members qualified by their set) is split on
    /// its first `" / "`, or failing that on its first `=`. The first record
    /// seen for a base name seeds the group's base entry; every appended
    /// variant re-aggregates the base from all variants so far. Records with
    /// an empty name are skipped and counted.
    pub fn group(components: Vec<ScoredComponent>) -> GroupedComponents {
        let mut groups = ComponentGroups::new();
        let mut skipped_unnamed = 0;

        for component in components {
            if component.name().trim().is_empty() {
                skipped_unnamed += 1;
                continue;
            }

            let grouping_name = component.record.grouping_name();
            let (base_name, variant_name) = split_variant_name(&grouping_name);
            let (base_name, variant_name) =
                (base_name.to_string(), variant_name.map(str::to_string));

            let group = groups
                .entry(base_name.clone())
                .or_insert_with(|| seed_group(base_name, &component));

            if let Some(variant_name) = variant_name {
                let mut variant = component;
                variant.record.name = variant_name;
                variant.record.component_set = None;
                group.variants.push(variant);
                aggregate_from_variants(group);
            }
        }

        GroupedComponents {
            groups,
            skipped_unnamed,
        }
    }
}

/// Splits `name` into its base name and, for variants, the remainder
pub fn split_variant_name(name: &str) -> (&str, Option<&str>) {
    VARIANT_SEPARATORS
        .iter()
        .find_map(|separator| name.split_once(separator))
        .map_or((name, None), |(base, rest)| (base, Some(rest)))
}

fn seed_group(base_name: String, first: &ScoredComponent) -> ComponentGroup {
    let mut base = first.clone();
    base.record.name = base_name.clone();
    base.record.component_set = None;
    ComponentGroup {
        base_name,
        base,
        variants: Vec::new(),
    }
}

fn aggregate_from_variants(group: &mut ComponentGroup) {
    let variants = &group.variants;
    let base = &mut group.base;

    let scores: Vec<u8> = variants.iter().map(|v| v.health_score).collect();
    base.health_score = round_half_up_mean(&scores);
    // The mean no longer derives from the seed's own rules
    base.applied_rules.clear();
    base.record.usage_count = variants.iter().map(|v| v.record.usage_count).sum();
    base.record.is_deprecated = variants.iter().any(|v| v.record.is_deprecated);
    base.record.is_orphaned = variants.iter().all(|v| v.record.usage_count == 0);

    if base.record.usable_thumbnail().is_none() {
        if let Some(url) = variants.iter().find_map(|v| v.record.usable_thumbnail()) {
            base.record.thumbnail_url = Some(url.to_string());
        }
    }
}
