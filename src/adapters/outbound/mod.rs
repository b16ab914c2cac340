/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod figma_document;
pub mod filesystem;
pub mod formatters;
pub mod network;
