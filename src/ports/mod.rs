/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the use cases directly, so only outbound (driven) ports
/// are declared here.
pub mod outbound;
