//! Application layer for council
//!
//! This crate contains the deliberation use case and its port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation::ConversationPort,
    observer::{DeliberationObserver, NoObserver},
    provider_gateway::{ProviderError, ProviderGateway},
};
pub use use_cases::run_deliberation::{DeliberationOrchestrator, RunDeliberationError};
