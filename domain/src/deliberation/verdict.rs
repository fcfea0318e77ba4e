//! Verdict synthesis
//!
//! The verdict is a deterministic function of the prompt, the roster, and
//! the collected outputs. No semantic analysis happens here — the template
//! lists every testimony in roster order and closes with a summary line.
//! Synthesis must only ever run once every provider has been heard.

use crate::core::prompt::Prompt;
use crate::provider::entities::{ProviderId, Roster};
use std::collections::HashMap;

/// Compose the final verdict from all collected outputs
///
/// `outputs` must contain one entry per roster id (failed providers are
/// represented by their sentinel text, so the mapping is still total).
/// Outputs are listed in roster order for a stable rendering; content is
/// order-independent.
pub fn synthesize_verdict(
    prompt: &Prompt,
    roster: &Roster,
    outputs: &HashMap<ProviderId, String>,
) -> String {
    let mut verdict = format!(
        "The council has deliberated on: \"{}\"\n\n{} distinct intelligences weighed in.\n",
        prompt.content(),
        roster.len()
    );

    for provider in roster.iter() {
        let testimony = outputs
            .get(provider.id())
            .map(String::as_str)
            .unwrap_or("(no testimony)");
        verdict.push_str(&format!(
            "\n- {} ({}): {}",
            provider.name(),
            provider.description(),
            testimony
        ));
    }

    if roster.is_empty() {
        verdict.push_str("\nWith no voices to weigh, the council returns the floor to you.");
    } else {
        verdict.push_str(
            "\n\nWeighing all testimony, the council considers the question examined from every seat at the table.",
        );
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::entities::{Provider, ProviderId};

    fn roster() -> Roster {
        Roster::new(vec![
            Provider::new("sage", "The Sage", "measured"),
            Provider::new("contrarian", "The Contrarian", "argues the other side"),
        ])
        .unwrap()
    }

    fn outputs() -> HashMap<ProviderId, String> {
        [
            (ProviderId::new("sage"), "Proceed carefully.".to_string()),
            (ProviderId::new("contrarian"), "Do not proceed.".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_verdict_quotes_original_prompt() {
        let prompt = Prompt::new("Ship it?");
        let verdict = synthesize_verdict(&prompt, &roster(), &outputs());
        assert!(verdict.contains("Ship it?"));
    }

    #[test]
    fn test_verdict_lists_every_testimony() {
        let verdict = synthesize_verdict(&Prompt::new("Ship it?"), &roster(), &outputs());
        assert!(verdict.contains("Proceed carefully."));
        assert!(verdict.contains("Do not proceed."));
        assert!(verdict.contains("2 distinct intelligences"));
    }

    #[test]
    fn test_verdict_is_listed_in_roster_order() {
        let verdict = synthesize_verdict(&Prompt::new("Ship it?"), &roster(), &outputs());
        let sage_at = verdict.find("The Sage").unwrap();
        let contrarian_at = verdict.find("The Contrarian").unwrap();
        assert!(sage_at < contrarian_at);
    }

    #[test]
    fn test_verdict_is_deterministic() {
        let prompt = Prompt::new("Ship it?");
        let a = synthesize_verdict(&prompt, &roster(), &outputs());
        let b = synthesize_verdict(&prompt, &roster(), &outputs());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_roster_yields_trivial_verdict() {
        let empty = Roster::new(vec![]).unwrap();
        let verdict = synthesize_verdict(&Prompt::new("Anyone there?"), &empty, &HashMap::new());
        assert!(verdict.contains("0 distinct intelligences"));
        assert!(verdict.contains("Anyone there?"));
    }
}
