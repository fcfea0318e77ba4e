//! Deliberation result value objects - immutable outcome of a finished run.
//!
//! These types exist for consumers (formatters, JSON output); the
//! orchestrator itself communicates through state and the conversation.

use serde::{Deserialize, Serialize};

use crate::provider::entities::Roster;

use super::state::DeliberationSnapshot;

/// One provider's collected testimony
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOutput {
    /// Stable provider id
    pub id: String,
    /// Display name
    pub name: String,
    /// The testimony text (or the sentinel, if the provider failed)
    pub content: String,
}

/// Complete record of a finished deliberation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliberationRecord {
    /// The original prompt
    pub prompt: String,
    /// Testimony per provider, in roster order
    pub outputs: Vec<ProviderOutput>,
    /// The synthesized verdict
    pub verdict: String,
}

impl DeliberationRecord {
    /// Assemble a record from a roster, a final snapshot, and the verdict text
    pub fn from_snapshot(
        prompt: impl Into<String>,
        roster: &Roster,
        snapshot: &DeliberationSnapshot,
        verdict: impl Into<String>,
    ) -> Self {
        let outputs = roster
            .iter()
            .map(|p| ProviderOutput {
                id: p.id().to_string(),
                name: p.name().to_string(),
                content: snapshot.outputs.get(p.id()).cloned().unwrap_or_default(),
            })
            .collect();

        Self {
            prompt: prompt.into(),
            outputs,
            verdict: verdict.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliberation::state::{DeliberationState, Phase};
    use crate::provider::entities::{Provider, ProviderId};

    #[test]
    fn test_record_preserves_roster_order() {
        let roster = Roster::new(vec![
            Provider::new("b", "B", "second seat"),
            Provider::new("a", "A", "first seat"),
        ])
        .unwrap();

        let mut state = DeliberationState::new();
        state.begin(&roster);
        state.record(&ProviderId::new("a"), "from a");
        state.record(&ProviderId::new("b"), "from b");
        state.set_phase(Phase::Synthesis);

        let record =
            DeliberationRecord::from_snapshot("why?", &roster, &state.snapshot(), "verdict");
        assert_eq!(record.outputs[0].id, "b");
        assert_eq!(record.outputs[1].id, "a");
        assert_eq!(record.outputs[0].content, "from b");
        assert_eq!(record.verdict, "verdict");
    }

    #[test]
    fn test_record_serializes_to_json() {
        let roster = Roster::new(vec![Provider::new("a", "A", "seat")]).unwrap();
        let mut state = DeliberationState::new();
        state.begin(&roster);
        state.record(&ProviderId::new("a"), "testimony");

        let record =
            DeliberationRecord::from_snapshot("why?", &roster, &state.snapshot(), "verdict");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"testimony\""));
        assert!(json.contains("\"verdict\""));
    }
}
