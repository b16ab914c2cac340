pub mod naming_heuristics;
mod scoring_rules;

pub use naming_heuristics::{is_deprecated_by_naming, is_interactive_by_name, ComponentText};
pub use scoring_rules::{RuleSeverity, ScoreRule, BASELINE_SCORE};
