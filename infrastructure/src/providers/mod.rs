//! Provider gateway adapters
//!
//! Only the simulated gateway lives here. A real network-backed gateway
//! would be another module implementing the same port.

pub mod simulated;

pub use simulated::SimulatedProviderGateway;
