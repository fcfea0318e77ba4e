//! Conversation port
//!
//! The conversation collaborator owns message storage; the orchestrator
//! only appends messages and grows the streaming verdict message. It
//! never reads history, so the port's read side exists purely for
//! observers and tests.
//!
//! Methods are synchronous and non-fallible, like the structured logging
//! ports in this codebase: the backing store is in-memory and a write
//! that cannot land has nowhere useful to report to.

use council_domain::{Message, MessageId, Role};

/// Port to the conversation owned by an external collaborator
pub trait ConversationPort: Send + Sync {
    /// Append a message, returning a handle for later mutation
    fn append(&self, role: Role, content: &str) -> MessageId;

    /// Append text to an existing message (the streaming verdict)
    fn append_text(&self, id: &MessageId, text: &str);

    /// Read back a single message's current text, if it exists
    fn message_text(&self, id: &MessageId) -> Option<String>;

    /// Snapshot the full message list
    fn messages(&self) -> Vec<Message>;
}
