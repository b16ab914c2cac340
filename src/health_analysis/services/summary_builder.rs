use crate::health_analysis::domain::{ComponentGroup, ComponentType, HealthSummary};
use chrono::{DateTime, Duration, Utc};

/// Window in which a base counts as recently updated
pub const RECENT_UPDATE_DAYS: i64 = 30;
/// Trimmed description length above which a base counts as documented
const WELL_DOCUMENTED_LENGTH: usize = 10;

/// Mean of `values` rounded half up; 0 for an empty slice
pub(crate) fn round_half_up_mean(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as u64;
    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    ((2 * sum + n) / (2 * n)) as u8
}

/// SummaryBuilder service computing file-level statistics over base components
pub struct SummaryBuilder;

impl SummaryBuilder {
    /// Summarizes one entry per group; variants are not counted.
    ///
    /// `now` anchors the recent-update window.
    pub fn summarize<'a, I>(groups: I, now: DateTime<Utc>) -> HealthSummary
    where
        I: IntoIterator<Item = &'a ComponentGroup>,
    {
        let window_start = now - Duration::days(RECENT_UPDATE_DAYS);
        let mut summary = HealthSummary::default();
        let mut scores = Vec::new();

        for group in groups {
            let base = &group.base.record;
            summary.total_components += 1;
            if base.description.trim().chars().count() > WELL_DOCUMENTED_LENGTH {
                summary.well_documented += 1;
            }
            if base.is_deprecated {
                summary.deprecated_components += 1;
            }
            if base
                .last_modified
                .is_some_and(|modified| modified >= window_start && modified <= now)
            {
                summary.recent_updates += 1;
            }
            if base.component_type == ComponentType::ComponentSet {
                summary.component_sets += 1;
            }
            scores.push(group.base.health_score);
        }

        summary.average_health_score = round_half_up_mean(&scores);
        summary
    }
}
