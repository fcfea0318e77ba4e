//! Infrastructure layer for council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod conversation;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileDeliberationConfig, FileProviderConfig};
pub use conversation::InMemoryConversation;
pub use providers::SimulatedProviderGateway;
