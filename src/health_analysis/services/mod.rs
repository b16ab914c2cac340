mod color_analyzer;
mod component_grouper;
mod health_scorer;
mod summary_builder;

pub use color_analyzer::{ColorContrastAnalyzer, MAX_DOMINANT_COLORS};
pub use component_grouper::{split_variant_name, ComponentGrouper, ComponentGroups, GroupedComponents};
pub use health_scorer::{HealthScorer, ScoreBreakdown};
pub use summary_builder::{SummaryBuilder, RECENT_UPDATE_DAYS};
