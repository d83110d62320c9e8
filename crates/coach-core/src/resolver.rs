//! Best-next-action resolution.

use crate::models::{PlanItem, WeeklyPlan};

/// Picks the single recommendation surfaced to the user.
///
/// A conversational override always wins. Otherwise the first `todo` item of
/// the plan in stored order, falling back to the first item regardless of
/// status. Without a plan there is nothing to recommend.
pub fn best_next_action<'a>(
    chat_override: Option<&'a PlanItem>,
    plan: Option<&'a WeeklyPlan>,
) -> Option<&'a PlanItem> {
    if let Some(item) = chat_override {
        return Some(item);
    }
    let plan = plan?;
    plan.first_todo().or_else(|| plan.first_item())
}
