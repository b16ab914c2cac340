//! figma-health - component health analysis for Figma libraries
//!
//! This library scores every component of a Figma file, groups variants
//! under their base component, analyzes thumbnail color contrast and
//! summarizes the library, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`health_analysis`): Component model, scoring policies and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use figma_health::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let component_source = FileSystemReader::new(PathBuf::from("design-system.json"));
//! let thumbnail_repository = CachingThumbnailRepository::new(HttpThumbnailRepository::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     AnalyzeLibraryUseCase::new(component_source, thumbnail_repository, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute(AnalysisRequest::default()).await?;
//!
//! // Format output
//! let model = HealthReportReadModelBuilder::build(&response);
//! let output = CsvFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod health_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingThumbnailRepository, FigmaApiClient, HttpThumbnailRepository,
    };
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::read_models::{HealthReportReadModel, HealthReportReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeLibraryUseCase;
    pub use crate::health_analysis::domain::{
        ComponentGroup, ComponentRecord, ComponentType, ContrastResult, FigmaFileKey,
        HealthSummary, ScoredComponent,
    };
    pub use crate::health_analysis::services::{
        ColorContrastAnalyzer, ComponentGrouper, HealthScorer, SummaryBuilder,
    };
    pub use crate::ports::outbound::{
        ComponentSource, OutputPresenter, ProgressReporter, ReportFormatter, ThumbnailRepository,
    };
    pub use crate::shared::Result;
}
