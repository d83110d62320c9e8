//! Chat message model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// Generates a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current instant as an RFC 3339 / ISO-8601 string (UTC).
pub fn now_iso() -> String {
    Timestamp::now().to_string()
}

/// A single entry of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique identifier within the session
    pub id: String,

    /// Author of the message
    pub role: Role,

    /// Message body; the only field rewritten after creation
    pub text: String,

    /// ISO-8601 creation time
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message with a fresh id stamped with the current time.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            role,
            text: text.into(),
            timestamp: now_iso(),
        }
    }

    /// Parses the timestamp, if it is a valid RFC 3339 instant.
    pub fn parsed_timestamp(&self) -> Option<Timestamp> {
        self.timestamp.parse().ok()
    }
}
