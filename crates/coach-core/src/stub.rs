//! Deterministic offline content.
//!
//! Everything here is pure apart from fresh ids and the current time. The
//! same functions serve stub mode and the fallback taken when the gateway
//! fails, so offline behavior is identical in both cases.

use jiff::{civil::Date, ToSpan, Zoned};

use crate::models::{ChatMessage, ChatReply, ItemStatus, PlanItem, Role, WeeklyPlan};

/// Title of the first stub plan item.
pub const STARTER_TITLE: &str = "10-min starter: open your notes and write 3 topics to review";

/// Title of the second stub plan item.
pub const OUTLINE_TITLE: &str = "15-min: outline 5 bullets for the next assignment/problem set";

/// Text shown in the assistant slot while a reply is outstanding.
pub const PLACEHOLDER_TEXT: &str = "Thinking…";

const COACHING_TEMPLATE: &str = "Let’s keep momentum. Do a tiny starter now: set a 10‑minute timer \
and write the first 3 bullet points.";

/// Monday of the ISO week containing `date`.
pub fn week_start_for(date: Date) -> Date {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    date.saturating_sub(offset.days())
}

/// Monday of the current ISO week in the local time zone.
pub fn current_week_start() -> Date {
    week_start_for(Zoned::now().date())
}

/// Generates the fixed two-item plan for the current week.
pub fn generate_weekly_plan() -> WeeklyPlan {
    generate_weekly_plan_for(current_week_start())
}

/// Generates the fixed two-item plan anchored to the week containing `date`.
pub fn generate_weekly_plan_for(date: Date) -> WeeklyPlan {
    WeeklyPlan {
        week_start: week_start_for(date).to_string(),
        items: vec![
            PlanItem::new(STARTER_TITLE, ItemStatus::Todo).with_estimate(10),
            PlanItem::new(OUTLINE_TITLE, ItemStatus::Todo).with_estimate(15),
        ],
    }
}

/// Builds the offline assistant reply for `user_text`.
///
/// The recommendation is the first `todo` item of `current_plan`; when there
/// is no plan or it has nothing left to do, the first item of a fresh stub
/// plan is used instead.
pub fn generate_chat_reply(user_text: &str, current_plan: Option<&WeeklyPlan>) -> ChatReply {
    let text = format!("{COACHING_TEMPLATE}\n\nYou said: {user_text}");
    let best_next_action = current_plan
        .and_then(WeeklyPlan::first_todo)
        .cloned()
        .or_else(|| generate_weekly_plan().items.into_iter().next());

    ChatReply {
        assistant_message: ChatMessage::new(Role::Assistant, text),
        best_next_action,
    }
}
