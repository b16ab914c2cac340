use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a failing quality gate
/// from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed and no threshold was violated
    Success = 0,
    /// Average health score is below the configured `--fail-under` threshold
    HealthBelowThreshold = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::HealthBelowThreshold => write!(f, "Health Below Threshold (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of the thumbnail contrast analysis.
///
/// Both kinds are recovered locally: the component is scored without a
/// contrast adjustment and the run continues.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContrastError {
    #[error("Failed to load thumbnail: {url}\nDetails: {details}")]
    ImageLoad { url: String, details: String },

    #[error("Contrast is undefined: found {distinct_colors} distinct dominant color(s), at least 2 are required")]
    Analysis { distinct_colors: usize },
}

/// Application-specific errors for component health analysis.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Figma API request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Check the file key and that your token has access to the file")]
    FigmaApi { endpoint: String, details: String },

    #[error("No Figma access token provided\n\n💡 Hint: Pass --token or set the FIGMA_TOKEN environment variable")]
    MissingToken,

    #[error("Invalid Figma file key: {input}\nReason: {reason}\n\n💡 Hint: Use the key from the file URL, e.g. https://www.figma.com/design/<key>/...")]
    InvalidFileKey { input: String, reason: String },

    #[error("Input file not found: {path}\n\n💡 Hint: Save the response of GET /v1/files/:key to a file and pass it with --input")]
    InputFileNotFound { path: PathBuf },

    #[error("Failed to parse Figma file JSON: {path}\nDetails: {details}\n\n💡 Hint: The input must be the unmodified response of GET /v1/files/:key")]
    InputParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and option values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::HealthBelowThreshold.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::HealthBelowThreshold),
            "Health Below Threshold (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_image_load_error_display() {
        let error = ContrastError::ImageLoad {
            url: "https://example.com/thumb.png".to_string(),
            details: "timed out after 30s".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("Failed to load thumbnail"));
        assert!(display.contains("https://example.com/thumb.png"));
        assert!(display.contains("timed out"));
    }

    #[test]
    fn test_analysis_error_display() {
        let error = ContrastError::Analysis { distinct_colors: 1 };
        assert!(error.to_string().contains("found 1 distinct"));
    }

    #[test]
    fn test_figma_api_error_display() {
        let error = HealthError::FigmaApi {
            endpoint: "/v1/files/abc".to_string(),
            details: "403 Forbidden".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("Figma API request failed"));
        assert!(display.contains("/v1/files/abc"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_token_display() {
        let display = HealthError::MissingToken.to_string();
        assert!(display.contains("FIGMA_TOKEN"));
    }

    #[test]
    fn test_input_parse_error_display() {
        let error = HealthError::InputParseError {
            path: PathBuf::from("/tmp/file.json"),
            details: "missing field `document`".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("/tmp/file.json"));
        assert!(display.contains("missing field"));
    }

    #[test]
    fn test_security_error_display() {
        let error = HealthError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
