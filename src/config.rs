//! Configuration file support for figma-health.
//!
//! Provides YAML-based configuration through `figma-health.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! config values with command-line flags.

use anyhow::{bail, Context};
use figma_health::application::dto::{
    ContrastSettings, OutputFormat, DEFAULT_CONTRAST_BATCH_SIZE,
};
use figma_health::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "figma-health.config.yml";

const MAX_CONTRAST_BATCH_SIZE: usize = 50;
const MAX_THUMBNAIL_TIMEOUT_SECS: u64 = 300;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub file_key: Option<String>,
    pub library: Option<bool>,
    pub analyze_contrast: Option<bool>,
    pub fail_under: Option<u8>,
    pub contrast_batch_size: Option<usize>,
    pub thumbnail_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}", e);
        }
    }
    if let Some(fail_under) = config.fail_under {
        if fail_under > 100 {
            bail!(
                "Invalid config: fail_under must be between 0 and 100, got {}.",
                fail_under
            );
        }
    }
    if let Some(batch_size) = config.contrast_batch_size {
        if !(1..=MAX_CONTRAST_BATCH_SIZE).contains(&batch_size) {
            bail!(
                "Invalid config: contrast_batch_size must be between 1 and {}, got {}.\n\n\
                 💡 Hint: The default of {} keeps the thumbnail CDN from throttling.",
                MAX_CONTRAST_BATCH_SIZE,
                batch_size,
                DEFAULT_CONTRAST_BATCH_SIZE
            );
        }
    }
    if let Some(timeout) = config.thumbnail_timeout_secs {
        if !(1..=MAX_THUMBNAIL_TIMEOUT_SECS).contains(&timeout) {
            bail!(
                "Invalid config: thumbnail_timeout_secs must be between 1 and {}, got {}.",
                MAX_THUMBNAIL_TIMEOUT_SECS,
                timeout
            );
        }
    }
    if let Some(file_key) = &config.file_key {
        if file_key.trim().is_empty() {
            bail!("Invalid config: file_key must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Where the components come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSource {
    /// File key or Figma URL, read through the REST API
    FileKey(String),
    /// Saved `GET /v1/files/:key` response
    Input(PathBuf),
}

/// Effective options after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSettings {
    /// `None` when neither the CLI nor the config names a file
    pub source: Option<AnalysisSource>,
    pub format: OutputFormat,
    pub force_library: bool,
    pub analyze_contrast: bool,
    pub fail_under: Option<u8>,
    pub contrast: ContrastSettings,
}

/// Merges with precedence CLI flag > config file > default.
///
/// Boolean flags can only switch a behavior on (`--library`) or off
/// (`--no-contrast`); when absent the config value applies.
pub fn merge_settings(args: &Args, config: Option<&ConfigFile>) -> Result<MergedSettings> {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let source = match (&args.input, &args.file_key) {
        (Some(path), _) => Some(AnalysisSource::Input(path.clone())),
        (None, Some(key)) => Some(AnalysisSource::FileKey(key.clone())),
        (None, None) => config
            .and_then(|c| c.file_key.clone())
            .map(AnalysisSource::FileKey),
    };

    let defaults = ContrastSettings::default();
    let contrast = ContrastSettings {
        batch_size: config
            .and_then(|c| c.contrast_batch_size)
            .unwrap_or(defaults.batch_size),
        thumbnail_timeout: config
            .and_then(|c| c.thumbnail_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.thumbnail_timeout),
        batch_pause: defaults.batch_pause,
    };

    Ok(MergedSettings {
        source,
        format: args.format.or(config_format).unwrap_or_default(),
        force_library: args.library || config.and_then(|c| c.library).unwrap_or(false),
        analyze_contrast: !args.no_contrast
            && config.and_then(|c| c.analyze_contrast).unwrap_or(true),
        fail_under: args.fail_under.or(config.and_then(|c| c.fail_under)),
        contrast,
    })
}
