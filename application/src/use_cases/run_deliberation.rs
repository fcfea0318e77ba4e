//! Run Deliberation use case
//!
//! Orchestrates one full deliberation: fan the prompt out to every
//! provider on the roster, collect testimony as the workers race to
//! completion, synthesize a verdict once all of them are in, and stream
//! it into the conversation's assistant message unit by unit.
//!
//! # Single-writer discipline
//!
//! Worker tasks never touch shared state. Each task returns its result
//! to the coordinating task via [`JoinSet::join_next`], and only the
//! coordinator mutates [`DeliberationState`] (behind a `std::sync::Mutex`
//! whose lock is never held across an await). This is what keeps the
//! active/outputs partition invariant intact while observers read
//! snapshots concurrently.

use crate::ports::conversation::ConversationPort;
use crate::ports::observer::DeliberationObserver;
use crate::ports::provider_gateway::ProviderGateway;
use council_domain::{
    synthesize_verdict, DeliberationSnapshot, DeliberationState, Phase, Prompt, ProviderId, Role,
    Roster,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default delay between streamed verdict units
const DEFAULT_STREAM_DELAY: Duration = Duration::from_millis(15);

/// Default text substituted for a failed provider invocation
const DEFAULT_SENTINEL: &str = "Abstained.";

/// Errors that can occur during deliberation
///
/// Note what is absent: provider failures. Those are contained at the
/// invocation boundary and replaced with the sentinel text, so a single
/// worker's failure never surfaces here.
#[derive(Error, Debug)]
pub enum RunDeliberationError {
    #[error("Deliberation already in progress")]
    AlreadyRunning,

    #[error("Deliberation cancelled")]
    Cancelled,
}

/// Orchestrates deliberations over a fixed provider roster
///
/// At most one deliberation may be in flight per instance; a second
/// `dispatch` while one is running is rejected, not interleaved.
pub struct DeliberationOrchestrator {
    gateway: Arc<dyn ProviderGateway>,
    roster: Roster,
    state: Mutex<DeliberationState>,
    cancel: Mutex<CancellationToken>,
    in_flight: AtomicBool,
    stream_delay: Duration,
    sentinel: String,
}

impl DeliberationOrchestrator {
    pub fn new(gateway: Arc<dyn ProviderGateway>, roster: Roster) -> Self {
        Self {
            gateway,
            roster,
            state: Mutex::new(DeliberationState::new()),
            cancel: Mutex::new(CancellationToken::new()),
            in_flight: AtomicBool::new(false),
            stream_delay: DEFAULT_STREAM_DELAY,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }

    /// Set the delay between streamed verdict units
    pub fn with_stream_delay(mut self, delay: Duration) -> Self {
        self.stream_delay = delay;
        self
    }

    /// Set the text substituted for a failed provider
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().unwrap().is_running()
    }

    /// Read-only snapshot of the live run state, callable from any thread
    pub fn snapshot(&self) -> DeliberationSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    /// Run one deliberation end to end
    ///
    /// Effects are observed through the state snapshot, the observer
    /// callbacks, and the conversation: a user message is appended, then
    /// an assistant placeholder that the verdict streams into.
    pub async fn dispatch(
        &self,
        prompt: Prompt,
        conversation: &dyn ConversationPort,
        observer: &dyn DeliberationObserver,
    ) -> Result<(), RunDeliberationError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RunDeliberationError::AlreadyRunning);
        }

        let token = CancellationToken::new();
        *self.cancel.lock().unwrap() = token.clone();

        let result = self.run(prompt, conversation, observer, &token).await;

        if result.is_err() {
            self.state.lock().unwrap().abort();
            observer.on_cancelled();
        }
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    /// Request the in-flight run to stop
    ///
    /// Synchronous, idempotent, best-effort: `running` drops promptly,
    /// workers and the stream observe the token at the next checkpoint.
    /// A no-op when nothing is in flight.
    pub fn cancel(&self) {
        if !self.in_flight.load(Ordering::SeqCst) {
            debug!("Cancel requested while idle; ignoring");
            return;
        }
        info!("Cancelling deliberation");
        self.cancel.lock().unwrap().cancel();
        self.state.lock().unwrap().abort();
    }

    async fn run(
        &self,
        prompt: Prompt,
        conversation: &dyn ConversationPort,
        observer: &dyn DeliberationObserver,
        token: &CancellationToken,
    ) -> Result<(), RunDeliberationError> {
        info!("Starting deliberation with {} providers", self.roster.len());

        self.state.lock().unwrap().begin(&self.roster);
        observer.on_dispatch(self.roster.len());
        observer.on_phase(Phase::FanOut);

        conversation.append(Role::User, prompt.content());
        let verdict_msg = conversation.append(Role::Assistant, "");

        // Fan out: one task per provider. Tasks return results to this
        // coordinator; they never write state themselves.
        let mut join_set = JoinSet::new();

        for provider in self.roster.iter() {
            let gateway = Arc::clone(&self.gateway);
            let provider = provider.clone();
            let prompt = prompt.content().to_string();

            join_set.spawn(async move {
                let result = gateway.generate(&provider, &prompt).await;
                (provider.id().clone(), result)
            });
        }

        // Fan-in barrier: drain the set fully. Synthesis needs every
        // testimony or its sentinel substitute, never a partial set.
        loop {
            let joined = tokio::select! {
                _ = token.cancelled() => {
                    join_set.abort_all();
                    return Err(RunDeliberationError::Cancelled);
                }
                joined = join_set.join_next() => joined,
            };

            match joined {
                None => break,
                Some(Ok((id, Ok(content)))) => {
                    debug!("Provider {} responded", id);
                    self.state.lock().unwrap().record(&id, content);
                    observer.on_provider_complete(&id, true);
                }
                Some(Ok((id, Err(e)))) => {
                    warn!("Provider {} failed: {}; substituting sentinel", id, e);
                    self.state.lock().unwrap().record(&id, self.sentinel.clone());
                    observer.on_provider_complete(&id, false);
                }
                Some(Err(e)) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        // A panicked or aborted worker never returns its id through the
        // JoinSet. Sweep anything still marked active and record its
        // abstention so the collected set stays total before synthesis.
        let stragglers: Vec<ProviderId> = {
            let state = self.state.lock().unwrap();
            state.active().iter().cloned().collect()
        };
        for id in stragglers {
            warn!("Provider {} never reported; substituting sentinel", id);
            self.state.lock().unwrap().record(&id, self.sentinel.clone());
            observer.on_provider_complete(&id, false);
        }

        info!("All providers finished; synthesizing verdict");
        self.state.lock().unwrap().set_phase(Phase::Synthesis);
        observer.on_phase(Phase::Synthesis);
        observer.on_synthesis_start();

        let outputs = self.state.lock().unwrap().outputs().clone();
        let verdict = synthesize_verdict(&prompt, &self.roster, &outputs);

        self.state.lock().unwrap().set_phase(Phase::Streaming);
        observer.on_phase(Phase::Streaming);

        // Stream the verdict one unit at a time. `running` stays true for
        // the whole emission; the token is checked before every unit.
        let mut unit = [0u8; 4];
        for ch in verdict.chars() {
            if token.is_cancelled() {
                return Err(RunDeliberationError::Cancelled);
            }
            let unit: &str = ch.encode_utf8(&mut unit);
            conversation.append_text(&verdict_msg, unit);
            observer.on_verdict_chunk(unit);
            tokio::time::sleep(self.stream_delay).await;
        }

        self.state.lock().unwrap().finish();
        observer.on_complete();
        info!("Deliberation complete");

        Ok(())
    }
}
