//! Wrapper types for transcripts and derived signals.

use std::fmt;

use crate::{models::PlanItem, thread::MessageThread};

/// The whole chat thread, oldest first.
pub struct Transcript<'a>(pub &'a MessageThread);

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No messages yet.");
        }
        for (index, message) in self.0.messages().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

/// Best-next-action callout.
pub struct NextAction<'a>(pub Option<&'a PlanItem>);

impl fmt::Display for NextAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(item) => writeln!(f, "## Best next action\n\n{item}"),
            None => writeln!(f, "## Best next action\n\nNothing to recommend yet."),
        }
    }
}

/// Imported-assignment count, where `None` means unknown.
pub struct ImportedCount(pub Option<usize>);

impl fmt::Display for ImportedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(1) => write!(f, "1 assignment imported"),
            Some(count) => write!(f, "{count} assignments imported"),
            None => write!(f, "Imported assignments: unknown"),
        }
    }
}
