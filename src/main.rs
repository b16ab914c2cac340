mod cli;
mod config;

use clap::{error::ErrorKind, CommandFactory};
use cli::Args;
use config::{discover_config, load_config_from_path, merge_settings, AnalysisSource, MergedSettings};
use figma_health::adapters::outbound::console::StderrProgressReporter;
use figma_health::adapters::outbound::filesystem::FileSystemReader;
use figma_health::adapters::outbound::network::{
    CachingThumbnailRepository, FigmaApiClient, HttpThumbnailRepository,
};
use figma_health::application::dto::{AnalysisRequest, AnalysisResponse};
use figma_health::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use figma_health::application::read_models::HealthReportReadModelBuilder;
use figma_health::application::use_cases::AnalyzeLibraryUseCase;
use figma_health::health_analysis::domain::FigmaFileKey;
use figma_health::ports::outbound::ComponentSource;
use figma_health::shared::error::{ExitCode, HealthError};
use figma_health::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    // Step 1: Load config and merge it with the command line
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = merge_settings(&args, config.as_ref())?;

    let Some(source) = settings.source.clone() else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!(
                    "one of --file-key or --input is required (or set file_key in {})",
                    config::CONFIG_FILENAME
                ),
            )
            .exit();
    };

    // Step 2: Analyze
    let response = match source {
        AnalysisSource::FileKey(input) => {
            let file_key = FigmaFileKey::parse(&input)?;
            let token = args.token.clone().ok_or(HealthError::MissingToken)?;
            analyze(FigmaApiClient::new(token, file_key)?, &settings).await?
        }
        AnalysisSource::Input(path) => analyze(FileSystemReader::new(path), &settings).await?,
    };

    // Step 3: Render and present the report
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = HealthReportReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    // Step 4: Quality gate
    Ok(evaluate_threshold(
        response.summary.average_health_score,
        settings.fail_under,
    ))
}

async fn analyze<CS: ComponentSource>(
    component_source: CS,
    settings: &MergedSettings,
) -> Result<AnalysisResponse> {
    let thumbnail_repository = CachingThumbnailRepository::new(HttpThumbnailRepository::new()?);
    let use_case = AnalyzeLibraryUseCase::new(
        component_source,
        thumbnail_repository,
        StderrProgressReporter::new(),
    );

    let request = AnalysisRequest::new(
        settings.force_library,
        settings.analyze_contrast,
        settings.contrast,
    );
    use_case.execute(request).await
}

fn evaluate_threshold(average_health_score: u8, fail_under: Option<u8>) -> ExitCode {
    match fail_under {
        Some(threshold) if average_health_score < threshold => {
            eprintln!(
                "❌ Average health score {}% is below the threshold of {}%",
                average_health_score, threshold
            );
            ExitCode::HealthBelowThreshold
        }
        _ => ExitCode::Success,
    }
}
