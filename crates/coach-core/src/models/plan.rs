//! Weekly plan model definitions.

use serde::{Deserialize, Serialize};

use super::{chat::new_id, ItemStatus};

/// One actionable entry of the weekly plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// Unique identifier for the item
    pub id: String,

    /// Short description of what to do
    pub title: String,

    /// Optional due date (ISO-8601)
    #[serde(default)]
    pub due_date: Option<String>,

    /// Rough effort estimate in minutes
    #[serde(default)]
    pub estimated_minutes: Option<u32>,

    /// Progress of the item
    pub status: ItemStatus,

    /// Assignment this item was derived from, if imported
    #[serde(default)]
    pub source_assignment_id: Option<String>,
}

impl PlanItem {
    /// Creates an item with a fresh id and no optional metadata.
    pub fn new(title: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            due_date: None,
            estimated_minutes: None,
            status,
            source_assignment_id: None,
        }
    }

    /// Sets the effort estimate.
    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// The plan for one ISO week.
///
/// `items` order is the display order; nothing resolves items by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Monday of the week, formatted `YYYY-MM-DD`
    pub week_start: String,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<PlanItem>,
}

impl WeeklyPlan {
    /// First item whose status is `todo`, in stored order.
    pub fn first_todo(&self) -> Option<&PlanItem> {
        self.items
            .iter()
            .find(|item| item.status == ItemStatus::Todo)
    }

    /// First item regardless of status.
    pub fn first_item(&self) -> Option<&PlanItem> {
        self.items.first()
    }

    /// Number of items marked done.
    pub fn completed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == ItemStatus::Done)
            .count()
    }
}
