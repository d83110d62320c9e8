//! State store orchestrating the chat thread and the weekly plan.
//!
//! The [`Store`] is the only writer of session state. Callers invoke its
//! async operations; each one decides between stub mode and live mode,
//! consults the gateway when live, falls back to stub content on any gateway
//! failure, and publishes the resulting state to subscribers.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Caller    │    │      Store      │    │  RemoteGateway  │
//! │ (CLI / UI)  │───▶│ (plan_ops,      │───▶│  or stub        │
//! │             │◀───│  chat_ops, ...) │    │  fallback       │
//! └─────────────┘    └─────────────────┘    └─────────────────┘
//!    watch::Receiver     single writer         live / offline
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Store`] instances
//! - [`plan_ops`]: Loading the weekly plan
//! - [`chat_ops`]: Sending messages with placeholder reconciliation
//! - [`account_ops`]: Credentials, external auth and imported assignments
//!
//! ## Consistency
//!
//! State lives in a `tokio::sync::watch` channel. Every mutation is applied
//! through one `send_modify` call and no borrow of the state is held across
//! an `.await`, so readers always observe a complete snapshot and in-flight
//! gateway calls never block them.
//!
//! # Usage Examples
//!
//! ```rust
//! use coach_core::{config::Settings, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_settings(Settings::default().into())
//!     .build()?;
//!
//! store.load_weekly_plan().await;
//! store.send_user_message("review chapter 4").await;
//!
//! let state = store.snapshot();
//! assert_eq!(state.thread.len(), 2);
//! assert!(state.best_next_action().is_some());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    config::SharedSettings,
    credentials::{CredentialStore, SESSION_TOKEN_KEY},
    gateway::RemoteGateway,
    models::{ChatMessage, PlanItem, WeeklyPlan},
    plan_state::PlanState,
    thread::MessageThread,
};

pub mod account_ops;
pub mod builder;
pub mod chat_ops;
pub mod plan_ops;


pub use builder::StoreBuilder;

/// Everything a view needs to render the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// Chat transcript in insertion order
    pub thread: MessageThread,

    /// Weekly plan and conversational override
    pub plan: PlanState,

    /// Number of imported assignments, `None` when unknown
    pub imported_assignments: Option<usize>,

    /// Whether the latest operation served stub content because the gateway
    /// failed
    pub degraded: bool,
}

impl StoreState {
    /// Recommendation surfaced to the user.
    pub fn best_next_action(&self) -> Option<&PlanItem> {
        self.plan.best_next_action()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.thread.messages()
    }

    pub fn weekly_plan(&self) -> Option<&WeeklyPlan> {
        self.plan.weekly_plan()
    }
}

/// Single-writer owner of the session state.
///
/// Cloning is cheap and every clone drives the same state.
#[derive(Clone)]
pub struct Store {
    pub(crate) settings: SharedSettings,
    pub(crate) gateway: Arc<dyn RemoteGateway>,
    pub(crate) credentials: Arc<dyn CredentialStore>,
    pub(crate) state: Arc<watch::Sender<StoreState>>,
}

impl Store {
    /// Creates a store with empty state.
    pub(crate) fn new(
        settings: SharedSettings,
        gateway: Arc<dyn RemoteGateway>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            settings,
            gateway,
            credentials,
            state: Arc::new(state),
        }
    }

    /// Settings handle shared with the gateway.
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Recommendation derived from the current plan and chat override.
    pub fn best_next_action(&self) -> Option<PlanItem> {
        self.state.borrow().best_next_action().cloned()
    }

    /// Stored session credential, if any.
    pub fn credential(&self) -> Option<String> {
        self.credentials
            .get(SESSION_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Applies one atomic mutation and notifies subscribers.
    pub(crate) fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut StoreState),
    {
        self.state.send_modify(apply);
    }
}
