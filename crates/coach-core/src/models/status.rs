//! Status and role enumerations shared by plans and messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the person using the app
    User,

    /// Text produced by the coaching assistant
    Assistant,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("Invalid message role: {s}")),
        }
    }
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Type-safe enumeration of plan item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Not started yet
    #[default]
    Todo,

    /// Currently being worked on
    Doing,

    /// Finished
    Done,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(ItemStatus::Todo),
            "doing" => Ok(ItemStatus::Doing),
            "done" => Ok(ItemStatus::Done),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Todo => "todo",
            ItemStatus::Doing => "doing",
            ItemStatus::Done => "done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Done` - Checkmark for finished items
    /// - `➤ Doing` - Arrow for items in progress
    /// - `○ Todo` - Circle for pending items
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coach_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(ItemStatus::Doing.with_icon(), "➤ Doing");
    /// assert_eq!(ItemStatus::Todo.with_icon(), "○ Todo");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemStatus::Done => "✓ Done",
            ItemStatus::Doing => "➤ Doing",
            ItemStatus::Todo => "○ Todo",
        }
    }
}
