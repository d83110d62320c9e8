//! Core library for the coach weekly planner and chat assistant.
//!
//! This crate keeps an in-memory view of a chat transcript and a weekly plan
//! consistent whether data comes from the backend or from the local stub
//! generator, and derives a single best-next-action recommendation from both.
//!
//! # Layers
//!
//! - **Models** ([`models`]): wire-compatible plan and chat types
//! - **State** ([`thread`], [`plan_state`], [`resolver`]): the transcript, the
//!   plan with its chat override, and recommendation resolution
//! - **Offline content** ([`stub`]): deterministic plans and replies
//! - **Collaborators** ([`gateway`], [`credentials`], [`config`]): backend
//!   access, secret storage and runtime settings
//! - **Orchestration** ([`store`]): the single writer tying it all together
//! - **Presentation** ([`display`]): markdown formatting
//!
//! # Quick Start
//!
//! ```rust
//! use coach_core::{config::Settings, display::Transcript, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_settings(Settings::default().into())
//!     .build()?;
//!
//! store.load_weekly_plan().await;
//! store.send_user_message("I have a quiz on Friday").await;
//!
//! let state = store.snapshot();
//! println!("{}", Transcript(&state.thread));
//! if let Some(action) = state.best_next_action() {
//!     println!("Next: {action}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod plan_state;
pub mod resolver;
pub mod store;
pub mod stub;
pub mod thread;

// Re-export commonly used types
pub use config::{Settings, SharedSettings};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{CoachError, GatewayError, Result};
pub use gateway::{HttpGateway, RemoteGateway};
pub use models::{Assignment, ChatMessage, ItemStatus, PlanItem, Role, WeeklyPlan};
pub use store::{Store, StoreBuilder, StoreState};
pub use thread::MessageThread;
