//! Simulated provider gateway
//!
//! Stands in for real network-backed providers: each invocation sleeps a
//! randomized delay inside a configured window, then answers in character
//! by echoing the prompt through the provider's persona. Replaceable
//! without touching the orchestrator.

use async_trait::async_trait;
use council_application::ports::provider_gateway::{ProviderError, ProviderGateway};
use council_domain::{Provider, ProviderId};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::debug;

/// Gateway that simulates variable-latency provider calls
pub struct SimulatedProviderGateway {
    min_latency: Duration,
    max_latency: Duration,
    failures: HashSet<ProviderId>,
    fixed_latency: HashMap<ProviderId, Duration>,
}

impl SimulatedProviderGateway {
    pub fn new(min_latency: Duration, max_latency: Duration) -> Self {
        Self {
            min_latency,
            max_latency: max_latency.max(min_latency),
            failures: HashSet::new(),
            fixed_latency: HashMap::new(),
        }
    }

    /// Force every invocation for this provider to fail
    ///
    /// Exercises the orchestrator's sentinel substitution path.
    pub fn fail_provider(mut self, id: impl Into<ProviderId>) -> Self {
        self.failures.insert(id.into());
        self
    }

    /// Pin a provider's latency instead of sampling the window
    pub fn with_fixed_latency(mut self, id: impl Into<ProviderId>, latency: Duration) -> Self {
        self.fixed_latency.insert(id.into(), latency);
        self
    }

    fn latency_for(&self, id: &ProviderId) -> Duration {
        if let Some(latency) = self.fixed_latency.get(id) {
            return *latency;
        }
        if self.min_latency == self.max_latency {
            return self.min_latency;
        }
        let millis = rand::thread_rng()
            .gen_range(self.min_latency.as_millis()..=self.max_latency.as_millis());
        Duration::from_millis(millis as u64)
    }
}

impl Default for SimulatedProviderGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(1800))
    }
}

#[async_trait]
impl ProviderGateway for SimulatedProviderGateway {
    async fn generate(&self, provider: &Provider, prompt: &str) -> Result<String, ProviderError> {
        let latency = self.latency_for(provider.id());
        debug!(
            "Simulating {} with {}ms latency",
            provider.id(),
            latency.as_millis()
        );
        tokio::time::sleep(latency).await;

        if self.failures.contains(provider.id()) {
            return Err(ProviderError::Network("simulated failure".to_string()));
        }

        Ok(format!(
            "{}, speaking as {}: on \"{}\", my counsel is to weigh it as I would — {}.",
            provider.name(),
            provider.description(),
            prompt,
            provider.description()
        ))
    }
}
