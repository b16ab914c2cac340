/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the Figma API, the file system, and the console.
pub mod component_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod thumbnail_repository;

pub use component_source::ComponentSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use thumbnail_repository::ThumbnailRepository;
