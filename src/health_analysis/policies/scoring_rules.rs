use serde::{Deserialize, Serialize};

/// Score every component starts from
pub const BASELINE_SCORE: i32 = 100;

/// Severity class of a rule, mirroring the order rules are checked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Critical,
    Major,
    Minor,
    Bonus,
    Contrast,
    Usage,
}

/// Every deduction and bonus the health scorer can apply.
///
/// The point table lives in [`ScoreRule::points`]; the scorer only decides
/// which rules fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreRule {
    Deprecated,
    BrokenLayout,
    AccessibilityViolation,
    MissingDocumentation,
    MissingVariants,
    NamingConvention,
    MissingThumbnail,
    MixedSeparators,
    RichDocumentation,
    DesignSystemNaming,
    LibraryDocumentation,
    StructuralCompleteness,
    AccessibilityExcellence,
    ContrastAaa,
    ContrastAa,
    ContrastAaLarge,
    ContrastFail,
    UnusedInFile,
}

impl ScoreRule {
    /// All rules in checklist order
    pub const ALL: [ScoreRule; 18] = [
        ScoreRule::Deprecated,
        ScoreRule::BrokenLayout,
        ScoreRule::AccessibilityViolation,
        ScoreRule::MissingDocumentation,
        ScoreRule::MissingVariants,
        ScoreRule::NamingConvention,
        ScoreRule::MissingThumbnail,
        ScoreRule::MixedSeparators,
        ScoreRule::RichDocumentation,
        ScoreRule::DesignSystemNaming,
        ScoreRule::LibraryDocumentation,
        ScoreRule::StructuralCompleteness,
        ScoreRule::AccessibilityExcellence,
        ScoreRule::ContrastAaa,
        ScoreRule::ContrastAa,
        ScoreRule::ContrastAaLarge,
        ScoreRule::ContrastFail,
        ScoreRule::UnusedInFile,
    ];

    /// Signed score delta
    pub fn points(&self) -> i32 {
        match self {
            ScoreRule::Deprecated | ScoreRule::BrokenLayout | ScoreRule::AccessibilityViolation => {
                -50
            }
            ScoreRule::MissingDocumentation | ScoreRule::MissingVariants => -25,
            ScoreRule::NamingConvention
            | ScoreRule::MissingThumbnail
            | ScoreRule::MixedSeparators => -10,
            ScoreRule::RichDocumentation
            | ScoreRule::DesignSystemNaming
            | ScoreRule::LibraryDocumentation
            | ScoreRule::StructuralCompleteness
            | ScoreRule::AccessibilityExcellence => 10,
            ScoreRule::ContrastAaa => 15,
            ScoreRule::ContrastAa => 10,
            ScoreRule::ContrastAaLarge => 5,
            ScoreRule::ContrastFail => -25,
            ScoreRule::UnusedInFile => -30,
        }
    }

    pub fn severity(&self) -> RuleSeverity {
        match self {
            ScoreRule::Deprecated | ScoreRule::BrokenLayout | ScoreRule::AccessibilityViolation => {
                RuleSeverity::Critical
            }
            ScoreRule::MissingDocumentation | ScoreRule::MissingVariants => RuleSeverity::Major,
            ScoreRule::NamingConvention
            | ScoreRule::MissingThumbnail
            | ScoreRule::MixedSeparators => RuleSeverity::Minor,
            ScoreRule::RichDocumentation
            | ScoreRule::DesignSystemNaming
            | ScoreRule::LibraryDocumentation
            | ScoreRule::StructuralCompleteness
            | ScoreRule::AccessibilityExcellence => RuleSeverity::Bonus,
            ScoreRule::ContrastAaa
            | ScoreRule::ContrastAa
            | ScoreRule::ContrastAaLarge
            | ScoreRule::ContrastFail => RuleSeverity::Contrast,
            ScoreRule::UnusedInFile => RuleSeverity::Usage,
        }
    }

    pub fn is_bonus(&self) -> bool {
        self.points() > 0
    }

    /// Human-readable explanation shown in reports
    pub fn description(&self) -> &'static str {
        match self {
            ScoreRule::Deprecated => "Component is deprecated",
            ScoreRule::BrokenLayout => "Bounding box has a zero or negative dimension",
            ScoreRule::AccessibilityViolation => {
                "Accessibility issue: missing focus/disabled state, size variant or contrast documentation"
            }
            ScoreRule::MissingDocumentation => "Description is missing or shorter than 10 characters",
            ScoreRule::MissingVariants => "No variants or interaction states",
            ScoreRule::NamingConvention => "Name does not follow the Capitalized / Segment convention",
            ScoreRule::MissingThumbnail => "Thumbnail is missing or a placeholder",
            ScoreRule::MixedSeparators => "Name mixes '=' and '/' separators",
            ScoreRule::RichDocumentation => "Detailed description with usage examples",
            ScoreRule::DesignSystemNaming => "Follows design-system family naming",
            ScoreRule::LibraryDocumentation => "Documented library component",
            ScoreRule::StructuralCompleteness => "Documented with a valid layout",
            ScoreRule::AccessibilityExcellence => "Meets accessibility best practices",
            ScoreRule::ContrastAaa => "Thumbnail colors meet WCAG AAA contrast",
            ScoreRule::ContrastAa => "Thumbnail colors meet WCAG AA contrast",
            ScoreRule::ContrastAaLarge => "Thumbnail colors meet WCAG AA contrast for large text only",
            ScoreRule::ContrastFail => "Thumbnail colors fail WCAG contrast (below 3:1)",
            ScoreRule::UnusedInFile => "No instances in this file",
        }
    }
}

impl std::fmt::Display for ScoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:+})", self.description(), self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_rules_cost_fifty() {
        for rule in ScoreRule::ALL
            .iter()
            .filter(|r| r.severity() == RuleSeverity::Critical)
        {
            assert_eq!(rule.points(), -50, "{:?}", rule);
        }
    }

    #[test]
    fn test_bonus_rules_add_ten() {
        let bonuses: Vec<_> = ScoreRule::ALL
            .iter()
            .filter(|r| r.severity() == RuleSeverity::Bonus)
            .collect();
        assert_eq!(bonuses.len(), 5);
        assert!(bonuses.iter().all(|r| r.points() == 10));
    }

    #[test]
    fn test_contrast_tiers() {
        assert_eq!(ScoreRule::ContrastAaa.points(), 15);
        assert_eq!(ScoreRule::ContrastAa.points(), 10);
        assert_eq!(ScoreRule::ContrastAaLarge.points(), 5);
        assert_eq!(ScoreRule::ContrastFail.points(), -25);
    }

    #[test]
    fn test_usage_penalty() {
        assert_eq!(ScoreRule::UnusedInFile.points(), -30);
        assert_eq!(ScoreRule::UnusedInFile.severity(), RuleSeverity::Usage);
    }

    #[test]
    fn test_is_bonus() {
        assert!(ScoreRule::ContrastAaLarge.is_bonus());
        assert!(!ScoreRule::MixedSeparators.is_bonus());
    }

    #[test]
    fn test_display_includes_signed_points() {
        assert_eq!(
            ScoreRule::MissingThumbnail.to_string(),
            "Thumbnail is missing or a placeholder (-10)"
        );
        assert!(ScoreRule::ContrastAaa.to_string().ends_with("(+15)"));
    }

    #[test]
    fn test_serializes_as_kebab_case() {
        let json = serde_json::to_string(&ScoreRule::UnusedInFile).unwrap();
        assert_eq!(json, "\"unused-in-file\"");
    }
}
