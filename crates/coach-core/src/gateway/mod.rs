//! Remote data gateway boundary.
//!
//! The store depends on [`RemoteGateway`] only. [`HttpGateway`] talks to the
//! coaching backend over HTTP; tests substitute a scripted fake.
//!
//! ```text
//! ┌─────────────┐   RemoteGateway   ┌──────────────┐   HTTP/JSON   ┌─────────┐
//! │    Store    │──────────────────▶│ HttpGateway  │──────────────▶│ Backend │
//! └─────────────┘                   └──────────────┘               └─────────┘
//! ```
//!
//! Every method fails with a [`GatewayError`]; callers are not expected to
//! distinguish between variants.

use async_trait::async_trait;

use crate::{
    error::GatewayError,
    models::{Assignment, AuthStart, ChatReply, WeeklyPlan},
};

pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpGateway;

/// Network-facing operations consumed by the store.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Asks the backend whether it is up.
    async fn check_health(&self) -> Result<bool, GatewayError>;

    /// Fetches the plan for the current week.
    async fn fetch_weekly_plan(&self, credential: Option<&str>) -> Result<WeeklyPlan, GatewayError>;

    /// Sends one user message with the current plan as context.
    async fn send_chat(
        &self,
        user_message: &str,
        current_plan: Option<&WeeklyPlan>,
        credential: Option<&str>,
    ) -> Result<ChatReply, GatewayError>;

    /// Begins the external authorization handshake.
    async fn start_external_auth(&self) -> Result<AuthStart, GatewayError>;

    /// Lists assignments imported from the external provider.
    async fn fetch_external_assignments(
        &self,
        credential: &str,
    ) -> Result<Vec<Assignment>, GatewayError>;
}
