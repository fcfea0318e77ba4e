//! In-memory conversation store
//!
//! The simplest useful [`ConversationPort`] implementation: an
//! interior-mutable message vec. Message ids are indices into the vec,
//! which is sound because messages are append-only.

use council_application::ports::conversation::ConversationPort;
use council_domain::{Message, MessageId, Role};
use std::sync::Mutex;

/// Conversation held entirely in memory
#[derive(Default)]
pub struct InMemoryConversation {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryConversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl ConversationPort for InMemoryConversation {
    fn append(&self, role: Role, content: &str) -> MessageId {
        let mut messages = self.messages.lock().unwrap();
        messages.push(Message::new(role, content));
        MessageId::new(messages.len() - 1)
    }

    fn append_text(&self, id: &MessageId, text: &str) {
        let mut messages = self.messages.lock().unwrap();
        if let Some(message) = messages.get_mut(id.index()) {
            message.content.push_str(text);
        }
    }

    fn message_text(&self, id: &MessageId) -> Option<String> {
        self.messages
            .lock()
            .unwrap()
            .get(id.index())
            .map(|m| m.content.clone())
    }

    fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_sequential_handles() {
        let conversation = InMemoryConversation::new();
        let first = conversation.append(Role::User, "hello");
        let second = conversation.append(Role::Assistant, "");

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn append_text_grows_the_addressed_message() {
        let conversation = InMemoryConversation::new();
        conversation.append(Role::User, "hello");
        let id = conversation.append(Role::Assistant, "");

        conversation.append_text(&id, "wor");
        conversation.append_text(&id, "ld");

        assert_eq!(conversation.message_text(&id).unwrap(), "world");
        // Other messages untouched
        assert_eq!(conversation.messages()[0].content, "hello");
    }

    #[test]
    fn append_text_to_unknown_handle_is_ignored() {
        let conversation = InMemoryConversation::new();
        conversation.append_text(&MessageId::new(7), "lost");
        assert!(conversation.is_empty());
    }
}
