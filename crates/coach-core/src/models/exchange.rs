//! Request and response bodies of a chat exchange.

use serde::{Deserialize, Serialize};

use super::{ChatMessage, PlanItem, WeeklyPlan};

/// Body sent to the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub user_message: String,
    #[serde(default)]
    pub current_plan: Option<WeeklyPlan>,
}

/// Assistant answer plus the recommendation derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub assistant_message: ChatMessage,
    #[serde(default)]
    pub best_next_action: Option<PlanItem>,
}
