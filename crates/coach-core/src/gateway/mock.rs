//! Scripted in-process gateway for tests.
//!
//! Each operation either succeeds with configured data or fails with a
//! `503` status. Chat replies echo the user message so concurrent sends can
//! be told apart. Chat replies and scripted plan fetches can be held back
//! behind semaphores to control when they complete.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use super::RemoteGateway;
use crate::{
    error::GatewayError,
    models::{Assignment, AuthStart, ChatMessage, ChatReply, PlanItem, Role, WeeklyPlan},
};

/// Status used for every scripted failure.
pub const UNAVAILABLE: u16 = 503;

fn unavailable() -> GatewayError {
    GatewayError::Status {
        status: UNAVAILABLE,
    }
}

/// Text the mock answers with for a given user message.
pub fn reply_text(user_message: &str) -> String {
    format!("Coach reply to: {user_message}")
}

/// Fake gateway whose behavior is fixed at construction.
#[derive(Debug, Default)]
pub struct MockGateway {
    healthy: Option<bool>,
    plan: Option<WeeklyPlan>,
    plan_script: Vec<(Arc<Semaphore>, WeeklyPlan)>,
    chat_enabled: bool,
    chat_action: Option<PlanItem>,
    chat_gate: Option<Arc<Semaphore>>,
    auth_url: Option<String>,
    assignments: Option<Vec<Assignment>>,
    plan_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    assignment_calls: AtomicUsize,
    credentials_seen: Mutex<Vec<Option<String>>>,
}

impl MockGateway {
    /// A gateway where every operation fails.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_health(mut self, healthy: bool) -> Self {
        self.healthy = Some(healthy);
        self
    }

    pub fn with_plan(mut self, plan: WeeklyPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// The n-th plan fetch waits on the n-th gate, then returns the n-th
    /// plan. Fetches beyond the script fall back to `with_plan`.
    pub fn with_gated_plans(mut self, script: Vec<(Arc<Semaphore>, WeeklyPlan)>) -> Self {
        self.plan_script = script;
        self
    }

    /// Enables chat replies carrying `action` as the recommendation.
    pub fn with_chat(mut self, action: Option<PlanItem>) -> Self {
        self.chat_enabled = true;
        self.chat_action = action;
        self
    }

    /// Makes every chat call wait for a permit from `gate` first.
    pub fn with_chat_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.chat_gate = Some(gate);
        self
    }

    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    pub fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        self.assignments = Some(assignments);
        self
    }

    pub fn plan_calls(&self) -> usize {
        self.plan_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn assignment_calls(&self) -> usize {
        self.assignment_calls.load(Ordering::SeqCst)
    }

    /// Credentials passed to plan and chat calls, in call order.
    pub fn credentials_seen(&self) -> Vec<Option<String>> {
        self.credentials_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record_credential(&self, credential: Option<&str>) {
        self.credentials_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(credential.map(str::to_string));
    }
}

#[async_trait]
impl RemoteGateway for MockGateway {
    async fn check_health(&self) -> Result<bool, GatewayError> {
        self.healthy.ok_or_else(unavailable)
    }

    async fn fetch_weekly_plan(&self, credential: Option<&str>) -> Result<WeeklyPlan, GatewayError> {
        let call = self.plan_calls.fetch_add(1, Ordering::SeqCst);
        self.record_credential(credential);
        if let Some((gate, plan)) = self.plan_script.get(call) {
            let permit = gate.acquire().await.map_err(|_| unavailable())?;
            permit.forget();
            return Ok(plan.clone());
        }
        self.plan.clone().ok_or_else(unavailable)
    }

    async fn send_chat(
        &self,
        user_message: &str,
        _current_plan: Option<&WeeklyPlan>,
        credential: Option<&str>,
    ) -> Result<ChatReply, GatewayError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.record_credential(credential);
        if let Some(gate) = &self.chat_gate {
            let permit = gate.acquire().await.map_err(|_| unavailable())?;
            permit.forget();
        }
        if !self.chat_enabled {
            return Err(unavailable());
        }
        Ok(ChatReply {
            assistant_message: ChatMessage::new(Role::Assistant, reply_text(user_message)),
            best_next_action: self.chat_action.clone(),
        })
    }

    async fn start_external_auth(&self) -> Result<AuthStart, GatewayError> {
        self.auth_url
            .clone()
            .map(|authorization_url| AuthStart {
                authorization_url,
                state: None,
            })
            .ok_or_else(unavailable)
    }

    async fn fetch_external_assignments(
        &self,
        _credential: &str,
    ) -> Result<Vec<Assignment>, GatewayError> {
        self.assignment_calls.fetch_add(1, Ordering::SeqCst);
        self.assignments.clone().ok_or_else(unavailable)
    }
}
