/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI, the use cases and the
/// report formatters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::{
    AnalysisRequest, ContrastSettings, DEFAULT_BATCH_PAUSE, DEFAULT_CONTRAST_BATCH_SIZE,
    DEFAULT_THUMBNAIL_TIMEOUT,
};
pub use analysis_response::{AnalysisResponse, ContrastStats};
pub use output_format::OutputFormat;
