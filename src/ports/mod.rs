/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the single driving adapter is the CLI,
/// which calls the application use cases directly.
pub mod outbound;
