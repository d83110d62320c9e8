//! Ordered, identity-addressable chat transcript.
//!
//! The thread only grows. The single mutation allowed on an existing entry is
//! replacing its text by id, which is how a provisional message is later
//! filled in with real content:
//!
//! ```rust
//! use coach_core::{models::Role, thread::MessageThread};
//!
//! let mut thread = MessageThread::default();
//! let pending = thread.begin(Role::Assistant, "Thinking…");
//! thread.push(Role::User, "another message");
//! assert!(thread.resolve(pending, "Here is the answer"));
//! assert_eq!(thread.messages()[0].text, "Here is the answer");
//! ```

use log::debug;

use crate::models::{ChatMessage, Role};

/// Handle to a provisional message appended by [`MessageThread::begin`].
///
/// The handle carries the id generated when the message was appended, so the
/// later fill-in targets that exact entry no matter how many messages were
/// appended in between. It is consumed on resolution and cannot be cloned,
/// so one placeholder is never resolved twice.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending message stays provisional until it is resolved"]
pub struct Pending {
    id: String,
}

impl Pending {
    /// Id of the provisional message.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Append-only list of chat messages in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageThread {
    messages: Vec<ChatMessage>,
}

impl MessageThread {
    /// Appends a fully formed message.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Appends a new message with a fresh id and returns that id.
    pub fn push(&mut self, role: Role, text: impl Into<String>) -> String {
        let message = ChatMessage::new(role, text);
        let id = message.id.clone();
        self.append(message);
        id
    }

    /// Appends a provisional message whose text will be replaced later.
    pub fn begin(&mut self, role: Role, placeholder: impl Into<String>) -> Pending {
        Pending {
            id: self.push(role, placeholder),
        }
    }

    /// Replaces the text of a provisional message with its final content.
    ///
    /// Returns `false` when the message is no longer in the thread; the
    /// update is dropped in that case.
    pub fn resolve(&mut self, pending: Pending, text: impl Into<String>) -> bool {
        self.update_text(&pending.id, text)
    }

    /// Replaces the text of the message with the given id.
    ///
    /// Also used for incremental updates of a message still being produced.
    /// An unknown id is a no-op and yields `false`.
    pub fn update_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.messages.iter_mut().find(|message| message.id == id) {
            Some(message) => {
                message.text = text.into();
                true
            }
            None => {
                debug!("Dropping text update for unknown message {id}");
                false
            }
        }
    }

    /// Looks a message up by id.
    pub fn get(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut thread = MessageThread::default();
        thread.push(Role::User, "first");
        thread.push(Role::Assistant, "second");
        thread.push(Role::User, "third");

        let texts: Vec<&str> = thread.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut thread = MessageThread::default();
        let a = thread.push(Role::User, "a");
        let b = thread.push(Role::User, "a");
        assert_ne!(a, b);
    }

    #[test]
    fn test_resolve_targets_by_id_not_position() {
        let mut thread = MessageThread::default();
        let first = thread.begin(Role::Assistant, "Thinking…");
        let second = thread.begin(Role::Assistant, "Thinking…");
        thread.push(Role::User, "interleaved");

        assert!(thread.resolve(second, "answer two"));
        assert!(thread.resolve(first, "answer one"));

        assert_eq!(thread.messages()[0].text, "answer one");
        assert_eq!(thread.messages()[1].text, "answer two");
        assert_eq!(thread.messages()[2].text, "interleaved");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut thread = MessageThread::default();
        thread.push(Role::User, "hello");
        let before = thread.clone();

        assert!(!thread.update_text("missing", "ignored"));
        assert_eq!(thread, before);
    }

    #[test]
    fn test_incremental_updates() {
        let mut thread = MessageThread::default();
        let pending = thread.begin(Role::Assistant, "");
        let id = pending.id().to_string();

        thread.update_text(&id, "Hel");
        thread.update_text(&id, "Hello");
        assert_eq!(thread.get(&id).map(|m| m.text.as_str()), Some("Hello"));

        assert!(thread.resolve(pending, "Hello there"));
        assert_eq!(thread.last().map(|m| m.text.as_str()), Some("Hello there"));
    }
}
