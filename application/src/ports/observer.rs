//! Deliberation observer port
//!
//! Defines the interface for reporting progress during a deliberation.
//! Implementations live in the presentation layer (console, tests) and
//! must not block — callbacks fire from the coordinating task.

use council_domain::{Phase, ProviderId};

/// Callback for progress updates during a deliberation run
pub trait DeliberationObserver: Send + Sync {
    /// Called when a run starts, with the roster size
    fn on_dispatch(&self, total_providers: usize);

    /// Called as each provider's task completes (success or abstention)
    fn on_provider_complete(&self, id: &ProviderId, success: bool);

    /// Called when the run enters a new phase
    fn on_phase(&self, _phase: Phase) {}

    /// Called once all providers are in and the verdict is being composed
    fn on_synthesis_start(&self) {}

    /// Called for each unit of the verdict as it streams out
    fn on_verdict_chunk(&self, _chunk: &str) {}

    /// Called once per run when the verdict has fully streamed
    fn on_complete(&self);

    /// Called when the run is abandoned by `cancel()`
    fn on_cancelled(&self) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl DeliberationObserver for NoObserver {
    fn on_dispatch(&self, _total_providers: usize) {}
    fn on_provider_complete(&self, _id: &ProviderId, _success: bool) {}
    fn on_complete(&self) {}
}
