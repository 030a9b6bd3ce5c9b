/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the scan has a single entry point,
/// `ScanRepositoriesUseCase`, which the CLI calls directly.
pub mod outbound;
