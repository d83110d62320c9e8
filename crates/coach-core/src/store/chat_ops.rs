//! Chat operations for the Store.

use log::{debug, warn};

use super::Store;
use crate::{models::Role, stub};

impl Store {
    /// Sends one user message and fills in the assistant's answer.
    ///
    /// Blank input is ignored. Otherwise the user message and a placeholder
    /// assistant message are appended immediately, the reply is obtained
    /// (locally in stub mode, from the gateway in live mode with a stub
    /// fallback on failure), the placeholder is rewritten by its id, and the
    /// reply's recommendation becomes the chat override.
    ///
    /// Never fails: the placeholder is always resolved.
    pub async fn send_user_message(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank chat message");
            return;
        }

        self.mutate(|state| {
            state.thread.push(Role::User, trimmed);
        });
        let mut pending = None;
        self.mutate(|state| {
            pending = Some(state.thread.begin(Role::Assistant, stub::PLACEHOLDER_TEXT));
        });
        let Some(pending) = pending else {
            return;
        };

        let use_stub = self.settings.use_stub_data();
        let current_plan = self.state.borrow().weekly_plan().cloned();

        let (reply, degraded) = if use_stub {
            (stub::generate_chat_reply(trimmed, current_plan.as_ref()), false)
        } else {
            let credential = self.credential();
            match self
                .gateway
                .send_chat(trimmed, current_plan.as_ref(), credential.as_deref())
                .await
            {
                Ok(reply) => (reply, false),
                Err(e) => {
                    warn!("Chat send failed, answering with stub reply: {e}");
                    (stub::generate_chat_reply(trimmed, current_plan.as_ref()), true)
                }
            }
        };

        let placeholder_id = pending.id().to_string();
        self.mutate(|state| {
            if !state.thread.resolve(pending, reply.assistant_message.text) {
                debug!("Placeholder {placeholder_id} vanished before its reply arrived");
            }
        });
        self.mutate(|state| {
            state.plan.set_override(reply.best_next_action);
            if use_stub && state.plan.seed(stub::generate_weekly_plan()) {
                debug!("Seeded stub plan after chat exchange");
            }
            state.degraded = degraded;
        });
    }

    /// Rewrites the text of the message with `id`.
    ///
    /// Returns `false`, leaving the thread untouched, when no such message
    /// exists.
    pub fn update_message_text(&self, id: &str, text: &str) -> bool {
        let mut updated = false;
        self.mutate(|state| {
            updated = state.thread.update_text(id, text);
        });
        updated
    }
}
