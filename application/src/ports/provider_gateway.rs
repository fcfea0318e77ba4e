//! Provider gateway port
//!
//! Defines the interface for asking a provider to answer a prompt.
//! A gateway is the worker capability: "given a prompt, asynchronously
//! produce a text response or fail."

use async_trait::async_trait;
use council_domain::Provider;
use thiserror::Error;

/// Errors a provider invocation can fail with
///
/// The orchestrator never branches on the variant — any failure is
/// contained at the invocation boundary and substituted with the
/// sentinel text. The taxonomy exists for real gateway implementations
/// and for log output.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for provider communication
///
/// This port defines how the application layer reaches providers.
/// Implementations (adapters) live in the infrastructure layer and must
/// be safely invocable from concurrent tasks — one `generate` call per
/// roster member runs in flight at once.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Ask a provider to answer the prompt
    async fn generate(&self, provider: &Provider, prompt: &str) -> Result<String, ProviderError>;
}
