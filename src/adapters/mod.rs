/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the Figma API, thumbnail downloads, report formats, files and the console.
pub mod outbound;
