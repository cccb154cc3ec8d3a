/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) the dispatch
/// core uses to reach the external engine and the console.
pub mod outbound;
