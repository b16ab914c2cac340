/// Network adapters for the Figma REST API and thumbnail downloads
mod caching_thumbnail_client;
mod figma_client;
mod thumbnail_client;

pub use caching_thumbnail_client::CachingThumbnailRepository;
pub use figma_client::FigmaApiClient;
pub use thumbnail_client::{decode_thumbnail, HttpThumbnailRepository};
