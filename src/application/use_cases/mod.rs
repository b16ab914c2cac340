/// Use cases module containing application business logic orchestration
mod analyze_contrast;
mod analyze_library;

pub use analyze_contrast::{AnalyzeContrastUseCase, ContrastOutcomes};
pub use analyze_library::AnalyzeLibraryUseCase;
