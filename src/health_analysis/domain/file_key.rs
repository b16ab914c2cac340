use crate::shared::error::HealthError;
use crate::shared::Result;

/// Maximum length for file keys (security limit)
const MAX_FILE_KEY_LENGTH: usize = 128;

/// Path segments that precede the key in Figma URLs
const URL_KEY_MARKERS: [&str; 3] = ["file", "design", "proto"];

/// NewType wrapper for a Figma file key with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FigmaFileKey(String);

impl FigmaFileKey {
    /// Accepts a bare key or a Figma URL such as
    /// `https://www.figma.com/design/<key>/Name?node-id=1-2`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let candidate = if trimmed.contains("://") || trimmed.starts_with("figma.com") {
            Self::extract_from_url(trimmed)?
        } else {
            trimmed.to_string()
        };
        Self::new(candidate).map_err(|e| {
            HealthError::InvalidFileKey {
                input: input.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn new(key: String) -> Result<Self> {
        if key.is_empty() {
            anyhow::bail!("File key cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if key.len() > MAX_FILE_KEY_LENGTH {
            anyhow::bail!(
                "File key is too long ({} bytes). Maximum allowed: {} bytes",
                key.len(),
                MAX_FILE_KEY_LENGTH
            );
        }

        // Keys are URL path segments; anything but alphanumerics would allow injection
        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            anyhow::bail!("File key contains invalid characters. Only ASCII letters and digits are allowed.");
        }

        Ok(Self(key))
    }

    fn extract_from_url(url: &str) -> Result<String> {
        let without_query = url.split(['?', '#']).next().unwrap_or(url);
        let segments: Vec<&str> = without_query.split('/').filter(|s| !s.is_empty()).collect();

        segments
            .windows(2)
            .find(|pair| URL_KEY_MARKERS.contains(&pair[0]))
            .map(|pair| pair[1].to_string())
            .ok_or_else(|| {
                HealthError::InvalidFileKey {
                    input: url.to_string(),
                    reason: "URL does not contain /file/<key> or /design/<key>".to_string(),
                }
                .into()
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FigmaFileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
