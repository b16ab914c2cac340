use clap::{ArgGroup, Parser};
use figma_health::application::dto::OutputFormat;
use std::path::PathBuf;

/// Score the health of the components in a Figma file or library
#[derive(Parser, Debug)]
#[command(name = "figma-health")]
#[command(version)]
#[command(about = "Score, group and report the components of a Figma library", long_about = None)]
#[command(group(ArgGroup::new("source").args(["file_key", "input"]).multiple(false)))]
pub struct Args {
    /// Figma file key, or a Figma file URL to take the key from
    #[arg(short = 'k', long, value_name = "KEY|URL")]
    pub file_key: Option<String>,

    /// Analyze a saved GET /v1/files/:key response instead of calling the API
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Figma personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format: json, markdown or csv [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat the file as a published library even if nothing is published
    #[arg(long)]
    pub library: bool,

    /// Skip the thumbnail color contrast analysis
    #[arg(long)]
    pub no_contrast: bool,

    /// Exit with code 1 if the average health score is below this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,

    /// Path to a config file (defaults to ./figma-health.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_file_key_mode() {
        let args = Args::try_parse_from([
            "figma-health",
            "--file-key",
            "AbC123",
            "--token",
            "figd_x",
            "-f",
            "csv",
            "--fail-under",
            "70",
        ])
        .unwrap();

        assert_eq!(args.file_key.as_deref(), Some("AbC123"));
        assert_eq!(args.token.as_deref(), Some("figd_x"));
        assert_eq!(args.format, Some(OutputFormat::Csv));
        assert_eq!(args.fail_under, Some(70));
        assert!(!args.library);
        assert!(!args.no_contrast);
    }

    #[test]
    fn test_parse_input_mode() {
        let args = Args::try_parse_from([
            "figma-health",
            "-i",
            "file.json",
            "--library",
            "--no-contrast",
            "-o",
            "report.md",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("file.json")));
        assert!(args.library);
        assert!(args.no_contrast);
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert_eq!(args.format, None);
    }

    #[test]
    fn test_file_key_and_input_conflict() {
        let err = Args::try_parse_from(["figma-health", "-k", "AbC123", "-i", "file.json"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_fail_under_out_of_range() {
        let err = Args::try_parse_from(["figma-health", "-i", "f.json", "--fail-under", "101"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_invalid_format() {
        let err =
            Args::try_parse_from(["figma-health", "-i", "f.json", "-f", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Invalid format"));
    }
}
