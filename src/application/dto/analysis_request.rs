use std::time::Duration;

/// Default number of thumbnails fetched concurrently
pub const DEFAULT_CONTRAST_BATCH_SIZE: usize = 5;
/// Default per-thumbnail timeout
pub const DEFAULT_THUMBNAIL_TIMEOUT: Duration = Duration::from_secs(30);
/// Default pause between thumbnail batches
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(50);

/// Throttling of the thumbnail contrast analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastSettings {
    pub batch_size: usize,
    pub thumbnail_timeout: Duration,
    pub batch_pause: Duration,
}

impl Default for ContrastSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_CONTRAST_BATCH_SIZE,
            thumbnail_timeout: DEFAULT_THUMBNAIL_TIMEOUT,
            batch_pause: DEFAULT_BATCH_PAUSE,
        }
    }
}

/// AnalysisRequest - Internal request DTO for the library analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Apply the library-file policy even if no publish metadata was found
    pub force_library: bool,
    /// Download thumbnails and score their color contrast
    pub analyze_contrast: bool,
    pub contrast: ContrastSettings,
}

impl AnalysisRequest {
    pub fn new(force_library: bool, analyze_contrast: bool, contrast: ContrastSettings) -> Self {
        Self {
            force_library,
            analyze_contrast,
            contrast,
        }
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self::new(false, true, ContrastSettings::default())
    }
}
