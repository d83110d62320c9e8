//! Display implementations for domain models.
//!
//! Output is markdown: the plan is a headed numbered list, messages are
//! bold role labels followed by the text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{ChatMessage, ItemStatus, PlanItem, Role, WeeklyPlan};

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.status.with_icon())?;

        let mut details = Vec::new();
        if let Some(minutes) = self.estimated_minutes {
            details.push(format!("{minutes} min"));
        }
        if let Some(due) = &self.due_date {
            details.push(format!("due {due}"));
        }
        if !details.is_empty() {
            write!(f, " - {}", details.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Week of {}", self.week_start)?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No items in this plan.");
        }

        for (position, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {item}", position + 1)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}/{} done",
            self.completed_count(),
            self.items.len()
        )
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.role {
            Role::User => "You",
            Role::Assistant => "Coach",
        };
        match self.parsed_timestamp() {
            Some(at) => writeln!(f, "**{label}** _{}_", LocalDateTime(&at))?,
            None => writeln!(f, "**{label}**")?,
        }
        writeln!(f, "{}", self.text)
    }
}
