//! Deliberation run state (Entity)
//!
//! [`DeliberationState`] tracks one run of the orchestrator: which
//! providers are still working, which have delivered, and whether the run
//! is live. It is single-writer by contract — only the orchestrator's
//! coordinating task mutates it; observers read snapshots.
//!
//! Invariant: once a run has started, every roster id is in exactly one
//! of `active` / `outputs` (never both, never neither) until the run ends.

use crate::provider::entities::{ProviderId, Roster};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Phase of a deliberation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No deliberation in flight
    Idle,
    /// Workers racing to answer the prompt
    FanOut,
    /// All workers done, verdict being composed
    Synthesis,
    /// Verdict being emitted unit by unit
    Streaming,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Idle => "idle",
            Phase::FanOut => "fan-out",
            Phase::Synthesis => "synthesis",
            Phase::Streaming => "streaming",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live state of a deliberation run
#[derive(Debug, Clone, Default)]
pub struct DeliberationState {
    running: bool,
    phase: Option<Phase>,
    active: HashSet<ProviderId>,
    outputs: HashMap<ProviderId, String>,
}

impl DeliberationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run: mark running, activate the full roster, clear outputs
    pub fn begin(&mut self, roster: &Roster) {
        self.running = true;
        self.phase = Some(Phase::FanOut);
        self.active = roster.ids().cloned().collect();
        self.outputs.clear();
    }

    /// Record a completed provider: move its id from `active` to `outputs`
    ///
    /// The move is atomic from the reader's point of view — callers hold
    /// the lock across the call. Returns false (and records nothing) when
    /// the id is not active, preserving the exactly-one-of-two invariant.
    pub fn record(&mut self, id: &ProviderId, output: impl Into<String>) -> bool {
        if !self.active.remove(id) {
            return false;
        }
        self.outputs.insert(id.clone(), output.into());
        true
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
    }

    /// End a run normally
    pub fn finish(&mut self) {
        self.running = false;
        self.phase = Some(Phase::Idle);
    }

    /// End a run on cancellation, abandoning whatever never completed
    pub fn abort(&mut self) {
        self.running = false;
        self.phase = Some(Phase::Idle);
        self.active.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase.unwrap_or(Phase::Idle)
    }

    pub fn active(&self) -> &HashSet<ProviderId> {
        &self.active
    }

    pub fn outputs(&self) -> &HashMap<ProviderId, String> {
        &self.outputs
    }

    /// Clone the state into an immutable snapshot for observers
    pub fn snapshot(&self) -> DeliberationSnapshot {
        DeliberationSnapshot {
            running: self.running,
            phase: self.phase(),
            active: self.active.clone(),
            outputs: self.outputs.clone(),
        }
    }
}

/// Read-only snapshot of [`DeliberationState`], safe to hand to any thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliberationSnapshot {
    pub running: bool,
    pub phase: Phase,
    pub active: HashSet<ProviderId>,
    pub outputs: HashMap<ProviderId, String>,
}

impl DeliberationSnapshot {
    /// Check the active/outputs partition against a roster
    ///
    /// Holds at every observable instant of a started run: the two sets
    /// are disjoint and together cover exactly the roster ids.
    pub fn partitions_roster(&self, roster: &Roster) -> bool {
        if self.active.iter().any(|id| self.outputs.contains_key(id)) {
            return false;
        }
        let covered = self.active.len() + self.outputs.len();
        covered == roster.len() && roster.ids().all(|id| {
            self.active.contains(id) || self.outputs.contains_key(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::entities::Provider;

    fn roster() -> Roster {
        Roster::new(vec![
            Provider::new("a", "A", "first"),
            Provider::new("b", "B", "second"),
            Provider::new("c", "C", "third"),
        ])
        .unwrap()
    }

    #[test]
    fn test_begin_activates_full_roster() {
        let mut state = DeliberationState::new();
        state.begin(&roster());

        assert!(state.is_running());
        assert_eq!(state.phase(), Phase::FanOut);
        assert_eq!(state.active().len(), 3);
        assert!(state.outputs().is_empty());
        assert!(state.snapshot().partitions_roster(&roster()));
    }

    #[test]
    fn test_record_moves_id_between_sets() {
        let mut state = DeliberationState::new();
        state.begin(&roster());

        let id = ProviderId::new("b");
        assert!(state.record(&id, "testimony"));

        assert!(!state.active().contains(&id));
        assert_eq!(state.outputs().get(&id).unwrap(), "testimony");
        assert!(state.snapshot().partitions_roster(&roster()));
    }

    #[test]
    fn test_record_unknown_id_is_rejected() {
        let mut state = DeliberationState::new();
        state.begin(&roster());

        assert!(!state.record(&ProviderId::new("ghost"), "??"));
        assert_eq!(state.outputs().len(), 0);
        assert_eq!(state.active().len(), 3);
    }

    #[test]
    fn test_double_record_is_rejected() {
        let mut state = DeliberationState::new();
        state.begin(&roster());

        let id = ProviderId::new("a");
        assert!(state.record(&id, "first"));
        assert!(!state.record(&id, "second"));
        assert_eq!(state.outputs().get(&id).unwrap(), "first");
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut state = DeliberationState::new();
        state.begin(&roster());
        for id in roster().ids() {
            state.record(id, "done");
        }
        state.finish();

        assert!(!state.is_running());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.outputs().len(), 3);
        assert!(state.active().is_empty());
    }

    #[test]
    fn test_abort_drops_pending_providers() {
        let mut state = DeliberationState::new();
        state.begin(&roster());
        state.record(&ProviderId::new("a"), "done");
        state.abort();

        assert!(!state.is_running());
        assert!(state.active().is_empty());
        // Delivered outputs survive for post-mortem inspection
        assert_eq!(state.outputs().len(), 1);
    }

    #[test]
    fn test_begin_clears_previous_run() {
        let mut state = DeliberationState::new();
        state.begin(&roster());
        state.record(&ProviderId::new("a"), "stale");
        state.finish();

        state.begin(&roster());
        assert!(state.outputs().is_empty());
        assert_eq!(state.active().len(), 3);
    }

    #[test]
    fn test_snapshot_partition_detects_overlap() {
        let snapshot = DeliberationSnapshot {
            running: true,
            phase: Phase::FanOut,
            active: [ProviderId::new("a")].into_iter().collect(),
            outputs: [(ProviderId::new("a"), "x".to_string())].into_iter().collect(),
        };
        assert!(!snapshot.partitions_roster(&roster()));
    }
}
