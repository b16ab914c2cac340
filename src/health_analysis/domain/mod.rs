pub mod component;
pub mod component_group;
pub mod contrast;
pub mod file_key;
pub mod library_snapshot;
pub mod summary;
pub mod thumbnail;

pub use component::{BoundingBox, ComponentRecord, ComponentType, ScoredComponent};
pub use component_group::ComponentGroup;
pub use contrast::{ContrastResult, ContrastTier, Rgb};
pub use file_key::FigmaFileKey;
pub use library_snapshot::LibrarySnapshot;
pub use summary::HealthSummary;
pub use thumbnail::ThumbnailImage;
