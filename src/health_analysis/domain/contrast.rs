use serde::{Deserialize, Serialize};

/// WCAG 2.1 minimum ratio for AAA body text
pub const WCAG_AAA_RATIO: f64 = 7.0;
/// WCAG 2.1 minimum ratio for AA body text
pub const WCAG_AA_RATIO: f64 = 4.5;
/// WCAG 2.1 minimum ratio for AA large text
pub const WCAG_AA_LARGE_RATIO: f64 = 3.0;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// WCAG relative luminance in [0, 1]
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG contrast ratio in [1, 21]; symmetric in its arguments
    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Conformance tier derived from the weakest color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastTier {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

/// Pairwise contrast statistics over a thumbnail's dominant colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub dominant_colors: Vec<Rgb>,
    pub min_contrast: f64,
    pub max_contrast: f64,
    pub avg_contrast: f64,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
    #[serde(rename = "wcagAALarge")]
    pub wcag_aa_large: bool,
}

impl ContrastResult {
    /// Computes the statistics over every unordered pair of `colors`.
    ///
    /// Returns `None` when fewer than two colors are given, since contrast
    /// is undefined for a single color.
    pub fn from_dominant_colors(colors: Vec<Rgb>) -> Option<Self> {
        if colors.len() < 2 {
            return None;
        }

        let mut ratios = Vec::with_capacity(colors.len() * (colors.len() - 1) / 2);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                ratios.push(a.contrast_ratio(b));
            }
        }

        let min_contrast = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let max_contrast = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg_contrast = ratios.iter().sum::<f64>() / ratios.len() as f64;

        Some(Self {
            dominant_colors: colors,
            min_contrast,
            max_contrast,
            avg_contrast,
            wcag_aa: min_contrast >= WCAG_AA_RATIO,
            wcag_aaa: min_contrast >= WCAG_AAA_RATIO,
            wcag_aa_large: min_contrast >= WCAG_AA_LARGE_RATIO,
        })
    }

    /// Highest satisfied tier, checked strictly from AAA down.
    ///
    /// `None` when the result carries no color pair (e.g. a deserialized
    /// result with a single color), in which case no adjustment applies.
    pub fn tier(&self) -> Option<ContrastTier> {
        if self.dominant_colors.len() < 2 {
            return None;
        }
        let tier = if self.wcag_aaa {
            ContrastTier::Aaa
        } else if self.wcag_aa {
            ContrastTier::Aa
        } else if self.wcag_aa_large {
            ContrastTier::AaLarge
        } else {
            ContrastTier::Fail
        };
        Some(tier)
    }
}
