//! Data models for the chat transcript and the weekly plan.
//!
//! These types mirror the backend's JSON schema so the same values travel
//! over the wire and live in the in-memory state without translation.
//! Display implementations are located in [`crate::display::models`].
//!
//! ## Identity
//!
//! - [`ChatMessage`] is addressed by its `id`; `text` is the only field that
//!   changes after construction (placeholder reconciliation).
//! - [`PlanItem`] and [`WeeklyPlan`] are immutable once built. A plan is
//!   replaced wholesale, never patched.
//!
//! # Examples
//!
//! ```rust
//! use coach_core::models::{ChatMessage, ItemStatus, PlanItem, Role, WeeklyPlan};
//!
//! let plan = WeeklyPlan {
//!     week_start: "2024-06-10".to_string(),
//!     items: vec![PlanItem::new("Outline the essay", ItemStatus::Todo)],
//! };
//! assert_eq!(plan.first_todo().map(|item| item.title.as_str()), Some("Outline the essay"));
//!
//! let message = ChatMessage::new(Role::User, "hello");
//! assert_eq!(message.role, Role::User);
//! ```

pub mod assignment;
pub mod chat;
pub mod exchange;
pub mod plan;
pub mod status;


pub use assignment::{Assignment, AuthStart};
pub use chat::{new_id, now_iso, ChatMessage};
pub use exchange::{ChatReply, ChatRequest};
pub use plan::{PlanItem, WeeklyPlan};
pub use status::{ItemStatus, Role};
