use crate::adapters::outbound::figma_document::FigmaDocumentParser;
use crate::health_analysis::domain::LibrarySnapshot;
use crate::ports::outbound::ComponentSource;
use crate::shared::error::HealthError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter analyzing a saved Figma file response
///
/// Implements the ComponentSource port over the JSON body of
/// `GET /v1/files/:key` stored on disk. Saved files carry no publish
/// metadata, so thumbnails are absent and the library flag is only set by
/// the caller.
pub struct FileSystemReader {
    input_path: PathBuf,
}

impl FileSystemReader {
    pub fn new(input_path: PathBuf) -> Self {
        Self { input_path }
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "Input file")?;

        let metadata = fs::metadata(path).map_err(|e| HealthError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            HealthError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn fallback_file_name(&self) -> String {
        self.input_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ComponentSource for FileSystemReader {
    async fn fetch_library(&self) -> Result<LibrarySnapshot> {
        if !self.input_path.exists() {
            return Err(HealthError::InputFileNotFound {
                path: self.input_path.clone(),
            }
            .into());
        }

        let content = self.safe_read_file(&self.input_path)?;
        let file = FigmaDocumentParser::parse_file(&content).map_err(|e| {
            HealthError::InputParseError {
                path: self.input_path.clone(),
                details: e.to_string(),
            }
        })?;

        let mut snapshot = FigmaDocumentParser::extract(&file, &[]);
        if snapshot.file_name.is_empty() {
            snapshot.file_name = self.fallback_file_name();
        }
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.input_path.display().to_string()
    }
}
