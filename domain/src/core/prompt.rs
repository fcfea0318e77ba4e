//! Prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A prompt to be put before the council (Value Object)
///
/// Represents the user query that will be dispatched to every provider
/// on the roster for deliberation. Guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace; use
    /// [`try_new`](Self::try_new) for caller-supplied text.
    pub fn new(content: impl Into<String>) -> Self {
        Self::try_new(content).expect("Prompt cannot be empty")
    }

    /// Validate caller-supplied text into a prompt
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidPrompt(
                "empty or whitespace-only".to_string(),
            ))
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_real_question() {
        let p = Prompt::new("Should we rewrite it in Rust?");
        assert_eq!(p.content(), "Should we rewrite it in Rust?");
        assert_eq!(p.to_string(), "Should we rewrite it in Rust?");
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(matches!(
            Prompt::try_new("   "),
            Err(DomainError::InvalidPrompt(_))
        ));
        assert!(Prompt::try_new("").is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_empty_input() {
        Prompt::new("");
    }

    #[test]
    fn inner_text_survives_round_trip() {
        let p = Prompt::try_new("Ship it?").unwrap();
        assert_eq!(p.into_content(), "Ship it?");
    }
}
