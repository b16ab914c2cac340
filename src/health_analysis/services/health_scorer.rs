use crate::health_analysis::domain::{
    ComponentRecord, ContrastResult, ContrastTier, ScoredComponent,
};
use crate::health_analysis::policies::naming_heuristics::{
    follows_naming_convention, has_accessibility_violation, has_mixed_separators,
    is_design_system_name, is_missing_thumbnail, lacks_variants, meets_accessibility_excellence,
    mentions_usage_examples, ComponentText,
};
use crate::health_analysis::policies::{ScoreRule, BASELINE_SCORE};
use serde::Serialize;

/// Minimum trimmed description length counted as documentation
const MIN_DOCUMENTATION_LENGTH: usize = 10;
/// Description length required for the rich-documentation bonus
const RICH_DOCUMENTATION_LENGTH: usize = 50;
/// Description length required for the library-documentation bonus
const LIBRARY_DOCUMENTATION_LENGTH: usize = 30;
/// Description length required for the structural-completeness bonus
const STRUCTURAL_DOCUMENTATION_LENGTH: usize = 20;

/// The rules that fired for one component and the resulting score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub applied: Vec<ScoreRule>,
    pub score: u8,
}

impl ScoreBreakdown {
    fn from_rules(applied: Vec<ScoreRule>) -> Self {
        let raw: i32 = BASELINE_SCORE + applied.iter().map(ScoreRule::points).sum::<i32>();
        Self {
            applied,
            score: raw.clamp(0, 100) as u8,
        }
    }

    /// Applied deductions, in checklist order
    pub fn issues(&self) -> impl Iterator<Item = &ScoreRule> {
        self.applied.iter().filter(|rule| !rule.is_bonus())
    }
}

/// HealthScorer service computing a 0-100 health score per component
///
/// Pure and total: the same record and contrast result always produce the
/// same score, and missing data simply fails the related checks.
pub struct HealthScorer;

impl HealthScorer {
    pub fn score(record: &ComponentRecord, contrast: Option<&ContrastResult>) -> u8 {
        Self::evaluate(record, contrast).score
    }

    /// Scores `record`, keeping the applied rules next to the score
    pub fn score_component(
        record: ComponentRecord,
        contrast: Option<ContrastResult>,
    ) -> ScoredComponent {
        let breakdown = Self::evaluate(&record, contrast.as_ref());
        ScoredComponent::new(record, breakdown.score, contrast)
            .with_applied_rules(breakdown.applied)
    }

    /// Evaluates every rule in checklist order
    pub fn evaluate(record: &ComponentRecord, contrast: Option<&ContrastResult>) -> ScoreBreakdown {
        let text = ComponentText::new(&record.name, &record.description);
        let accessibility_violation = has_accessibility_violation(&text);
        let description_length = record.description.chars().count();

        let mut applied = Vec::new();
        let mut apply = |rule: ScoreRule, fires: bool| {
            if fires {
                applied.push(rule);
            }
        };

        // Critical
        apply(ScoreRule::Deprecated, record.is_deprecated);
        apply(
            ScoreRule::BrokenLayout,
            record.bounding_box.is_some_and(|bbox| bbox.is_broken()),
        );
        apply(ScoreRule::AccessibilityViolation, accessibility_violation);

        // Major
        apply(
            ScoreRule::MissingDocumentation,
            record.description.trim().chars().count() < MIN_DOCUMENTATION_LENGTH,
        );
        apply(ScoreRule::MissingVariants, lacks_variants(&record.name));

        // Minor
        apply(
            ScoreRule::NamingConvention,
            !follows_naming_convention(&record.name),
        );
        apply(
            ScoreRule::MissingThumbnail,
            is_missing_thumbnail(record.thumbnail_url.as_deref()),
        );
        apply(
            ScoreRule::MixedSeparators,
            has_mixed_separators(&record.name),
        );

        // Bonuses
        apply(
            ScoreRule::RichDocumentation,
            description_length > RICH_DOCUMENTATION_LENGTH
                && mentions_usage_examples(&record.description),
        );
        apply(
            ScoreRule::DesignSystemNaming,
            is_design_system_name(&record.name),
        );
        apply(
            ScoreRule::LibraryDocumentation,
            record.is_library_file && description_length > LIBRARY_DOCUMENTATION_LENGTH,
        );
        apply(
            ScoreRule::StructuralCompleteness,
            description_length > STRUCTURAL_DOCUMENTATION_LENGTH
                && record.bounding_box.is_some_and(|bbox| !bbox.is_broken()),
        );
        apply(
            ScoreRule::AccessibilityExcellence,
            !accessibility_violation && meets_accessibility_excellence(&text),
        );

        // Contrast: only the highest matching tier
        if let Some(tier) = contrast.and_then(ContrastResult::tier) {
            apply(Self::contrast_rule(tier), true);
        }

        // Library components are consumed by other files, so zero local instances is expected
        apply(
            ScoreRule::UnusedInFile,
            !record.is_library_file && record.usage_count == 0,
        );

        ScoreBreakdown::from_rules(applied)
    }

    fn contrast_rule(tier: ContrastTier) -> ScoreRule {
        match tier {
            ContrastTier::Aaa => ScoreRule::ContrastAaa,
            ContrastTier::Aa => ScoreRule::ContrastAa,
            ContrastTier::AaLarge => ScoreRule::ContrastAaLarge,
            ContrastTier::Fail => ScoreRule::ContrastFail,
        }
    }
}
