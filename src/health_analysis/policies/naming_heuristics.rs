//! Keyword heuristics over component names and descriptions.
//!
//! Every predicate is a case-insensitive substring test against fixed keyword
//! lists. They are knowingly approximate (a name containing "main" counts as
//! a landmark role, "old" matches "Bold") and are kept literal so scores
//! stay comparable across runs.

use regex::Regex;
use std::sync::LazyLock;

const DEPRECATION_KEYWORDS: &[&str] = &["deprecated", "old", "legacy", "do not use", "obsolete"];

const INTERACTIVE_KEYWORDS: &[&str] = &[
    "button", "input", "link", "checkbox", "radio", "select", "toggle", "switch",
];
const FOCUS_STATE_KEYWORDS: &[&str] = &["focus", "focused", "keyboard"];
const DISABLED_STATE_KEYWORDS: &[&str] = &["disabled", "inactive"];

const TEXT_BEARING_KEYWORDS: &[&str] = &["text", "label", "title", "heading", "caption", "body"];
const SIZE_VARIANT_KEYWORDS: &[&str] = &["small", "medium", "large", "xl", "size=", "size /"];

const CONTRAST_WARNING_PATTERNS: &[&str] = &[
    "white text",
    "light text",
    "gray text",
    "grey text",
    "white button",
    "light button",
    "ghost button",
    "transparent",
    "overlay",
    "watermark",
];
const CONTRAST_DOC_KEYWORDS: &[&str] = &["contrast", "wcag", "aa", "aaa", "4.5:1", "3:1", "7:1"];

const COMMON_VARIANT_KEYWORDS: &[&str] = &["hover", "disabled", "active", "focus", "default"];

const RICH_DOC_KEYWORDS: &[&str] = &["example", "usage"];
const DESIGN_SYSTEM_PREFIXES: &[&str] = &["Button", "Input", "Card", "Icon", "Badge", "Alert"];

const STATE_COVERAGE_KEYWORDS: &[&str] = &["default", "hover", "focus", "disabled"];
const ACCESSIBILITY_DOC_KEYWORDS: &[&str] = &[
    "accessibility",
    "a11y",
    "screen reader",
    "keyboard",
    "aria",
    "contrast",
];
const WCAG_COMPLIANCE_KEYWORDS: &[&str] = &[
    "wcag",
    "4.5:1",
    "3:1",
    "7:1",
    "aa compliance",
    "aaa compliance",
    "contrast ratio",
];
const SEMANTIC_ROLE_KEYWORDS: &[&str] = &[
    "button",
    "input",
    "label",
    "heading",
    "navigation",
    "banner",
    "main",
    "aside",
];
const SIZE_OPTION_KEYWORDS: &[&str] = &["small", "medium", "large", "size=", "size", "scale"];

const PLACEHOLDER_MARKER: &str = "placeholder";

/// Capitalized segments joined by `/` or `=`, e.g. `Button / Primary`
static NAMING_CONVENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z0-9]*(\s*[/=]\s*[A-Z][a-zA-Z0-9]*)*$")
        .expect("naming convention pattern is valid")
});

/// Minimum number of excellence criteria for the full accessibility bonus
const EXCELLENCE_THRESHOLD: usize = 3;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Lower-cased views of a component's name and description
#[derive(Debug, Clone)]
pub struct ComponentText {
    name: String,
    description: String,
    combined: String,
}

impl ComponentText {
    pub fn new(name: &str, description: &str) -> Self {
        let name = name.to_lowercase();
        let description = description.to_lowercase();
        let combined = format!("{} {}", name, description);
        Self {
            name,
            description,
            combined,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name and description joined by a space
    pub fn combined(&self) -> &str {
        &self.combined
    }
}

/// Deprecation by naming: deprecation keywords in name or description, or a
/// leading underscore on the name.
pub fn is_deprecated_by_naming(name: &str, description: &str) -> bool {
    let text = ComponentText::new(name, description);
    name.trim_start().starts_with('_') || contains_any(text.combined(), DEPRECATION_KEYWORDS)
}

pub fn is_interactive_by_name(text: &ComponentText) -> bool {
    contains_any(text.name(), INTERACTIVE_KEYWORDS)
}

pub fn is_text_bearing_by_name(text: &ComponentText) -> bool {
    contains_any(text.name(), TEXT_BEARING_KEYWORDS)
}

fn is_button_or_input_by_name(text: &ComponentText) -> bool {
    text.name().contains("button") || text.name().contains("input")
}

pub fn has_focus_state(text: &ComponentText) -> bool {
    contains_any(text.combined(), FOCUS_STATE_KEYWORDS)
}

pub fn has_disabled_state(text: &ComponentText) -> bool {
    contains_any(text.combined(), DISABLED_STATE_KEYWORDS)
}

pub fn has_size_variant(text: &ComponentText) -> bool {
    contains_any(text.combined(), SIZE_VARIANT_KEYWORDS)
}

/// Contrast problems inferred from naming alone
pub fn has_contrast_naming_issue(text: &ComponentText) -> bool {
    let text_like = is_text_bearing_by_name(text) || is_button_or_input_by_name(text);

    let risky_styling = text_like && contains_any(text.combined(), CONTRAST_WARNING_PATTERNS);
    let undocumented_contrast =
        is_button_or_input_by_name(text) && !contains_any(text.combined(), CONTRAST_DOC_KEYWORDS);
    let disabled_without_contrast_note =
        text.name().contains("disabled") && !text.description().contains("contrast");

    risky_styling || undocumented_contrast || disabled_without_contrast_note
}

/// True if any accessibility heuristic fires
pub fn has_accessibility_violation(text: &ComponentText) -> bool {
    let interactive = is_interactive_by_name(text);

    (interactive && !has_focus_state(text))
        || (interactive && !has_disabled_state(text))
        || (is_text_bearing_by_name(text) && !has_size_variant(text))
        || has_contrast_naming_issue(text)
}

/// Number of satisfied accessibility-excellence criteria (0..=5)
pub fn accessibility_excellence_count(text: &ComponentText) -> usize {
    let criteria = [
        STATE_COVERAGE_KEYWORDS
            .iter()
            .all(|state| text.combined().contains(state)),
        contains_any(text.description(), ACCESSIBILITY_DOC_KEYWORDS),
        contains_any(text.description(), WCAG_COMPLIANCE_KEYWORDS),
        contains_any(text.name(), SEMANTIC_ROLE_KEYWORDS),
        contains_any(text.combined(), SIZE_OPTION_KEYWORDS),
    ];
    criteria.iter().filter(|met| **met).count()
}

pub fn meets_accessibility_excellence(text: &ComponentText) -> bool {
    accessibility_excellence_count(text) >= EXCELLENCE_THRESHOLD
}

pub fn has_separator(name: &str) -> bool {
    name.contains('=') || name.contains('/')
}

pub fn has_mixed_separators(name: &str) -> bool {
    name.contains('=') && name.contains('/')
}

/// A name with no separator and no state keyword has no variants
pub fn lacks_variants(name: &str) -> bool {
    let lower = name.to_lowercase();
    !has_separator(name) && !contains_any(&lower, COMMON_VARIANT_KEYWORDS)
}

pub fn follows_naming_convention(name: &str) -> bool {
    NAMING_CONVENTION.is_match(name)
}

pub fn is_missing_thumbnail(thumbnail_url: Option<&str>) -> bool {
    thumbnail_url.map_or(true, |url| url.is_empty() || url.contains(PLACEHOLDER_MARKER))
}

pub fn mentions_usage_examples(description: &str) -> bool {
    contains_any(&description.to_lowercase(), RICH_DOC_KEYWORDS)
}

/// Case-sensitive: the design-system families are matched by their exact names
pub fn is_design_system_name(name: &str) -> bool {
    DESIGN_SYSTEM_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
        && has_separator(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, description: &str) -> ComponentText {
        ComponentText::new(name, description)
    }

    #[test]
    fn test_is_deprecated_by_naming_keywords() {
        assert!(is_deprecated_by_naming("Button (Deprecated)", ""));
        assert!(is_deprecated_by_naming("Card", "Legacy card, use Tile"));
        assert!(is_deprecated_by_naming("Modal", "DO NOT USE"));
        assert!(is_deprecated_by_naming("Obsolete Icon", ""));
        assert!(!is_deprecated_by_naming("Button", "Primary action"));
    }

    #[test]
    fn test_is_deprecated_by_naming_leading_underscore() {
        assert!(is_deprecated_by_naming("_Internal", ""));
        assert!(!is_deprecated_by_naming("Internal_", ""));
    }

    #[test]
    fn test_is_deprecated_matches_old_substring() {
        // "old" inside "Bold" also matches; the heuristic is literal
        assert!(is_deprecated_by_naming("Bold Heading", ""));
    }

    #[test]
    fn test_is_interactive_by_name() {
        assert!(is_interactive_by_name(&text("Toggle / On", "")));
        assert!(is_interactive_by_name(&text("Checkbox", "")));
        assert!(!is_interactive_by_name(&text("Avatar", "has a button")));
    }

    #[test]
    fn test_accessibility_violation_interactive_without_states() {
        assert!(has_accessibility_violation(&text("Link", "")));
        assert!(has_accessibility_violation(&text("Link", "focus ring")));
        assert!(!has_accessibility_violation(&text(
            "Link",
            "focus ring and disabled state"
        )));
    }

    #[test]
    fn test_accessibility_violation_text_without_size() {
        assert!(has_accessibility_violation(&text("Heading", "")));
        assert!(!has_accessibility_violation(&text("Heading / Large", "")));
    }

    #[test]
    fn test_contrast_naming_issue_warning_pattern() {
        assert!(has_contrast_naming_issue(&text("Label / Small", "White text on photos")));
        assert!(!has_contrast_naming_issue(&text("Avatar", "transparent background")));
    }

    #[test]
    fn test_contrast_naming_issue_button_without_docs() {
        assert!(has_contrast_naming_issue(&text("Button", "Primary action")));
        assert!(!has_contrast_naming_issue(&text("Button", "Meets WCAG contrast")));
    }

    #[test]
    fn test_contrast_naming_issue_disabled_variant() {
        assert!(has_contrast_naming_issue(&text("Chip / Disabled", "Muted chip")));
        assert!(!has_contrast_naming_issue(&text(
            "Chip / Disabled",
            "Muted chip, contrast checked"
        )));
    }

    #[test]
    fn test_accessibility_excellence_count() {
        let full = text(
            "Button / Large",
            "Default, hover, focus and disabled states. Keyboard accessible, WCAG AA.",
        );
        assert_eq!(accessibility_excellence_count(&full), 5);

        let none = text("Avatar", "Round picture");
        assert_eq!(accessibility_excellence_count(&none), 0);
        assert!(!meets_accessibility_excellence(&none));
    }

    #[test]
    fn test_lacks_variants() {
        assert!(lacks_variants("Avatar"));
        assert!(!lacks_variants("Avatar / Small"));
        assert!(!lacks_variants("State=On"));
        assert!(!lacks_variants("Avatar Hover"));
    }

    #[test]
    fn test_follows_naming_convention() {
        assert!(follows_naming_convention("Button"));
        assert!(follows_naming_convention("Button/Primary"));
        assert!(follows_naming_convention("Button / Primary = Large"));
        assert!(!follows_naming_convention("button"));
        assert!(!follows_naming_convention("Button / primary"));
        assert!(!follows_naming_convention("Button Primary"));
        assert!(!follows_naming_convention(""));
    }

    #[test]
    fn test_is_missing_thumbnail() {
        assert!(is_missing_thumbnail(None));
        assert!(is_missing_thumbnail(Some("")));
        assert!(is_missing_thumbnail(Some("https://x/placeholder.png")));
        assert!(!is_missing_thumbnail(Some("https://x/y.png")));
    }

    #[test]
    fn test_separators() {
        assert!(has_separator("A/B"));
        assert!(has_separator("A=B"));
        assert!(!has_separator("A B"));
        assert!(has_mixed_separators("A/B=C"));
        assert!(!has_mixed_separators("A / B"));
    }

    #[test]
    fn test_is_design_system_name() {
        assert!(is_design_system_name("Button/Primary"));
        assert!(is_design_system_name("Icon=Arrow"));
        assert!(!is_design_system_name("Button"));
        assert!(!is_design_system_name("button/primary"));
        assert!(!is_design_system_name("Tooltip/Top"));
    }

    #[test]
    fn test_mentions_usage_examples() {
        assert!(mentions_usage_examples("See the Example below"));
        assert!(mentions_usage_examples("Usage: forms"));
        assert!(!mentions_usage_examples("Primary action"));
    }
}
