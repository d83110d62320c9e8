use std::sync::Arc;

use async_trait::async_trait;
use coach_core::{
    models::{Assignment, AuthStart, ChatMessage, ChatReply, PlanItem, Role},
    GatewayError, RemoteGateway, Settings, SharedSettings, Store, StoreBuilder, WeeklyPlan,
};

/// Gateway that answers every call with a 502.
pub struct DownGateway;

fn bad_gateway() -> GatewayError {
    GatewayError::Status { status: 502 }
}

#[async_trait]
impl RemoteGateway for DownGateway {
    async fn check_health(&self) -> Result<bool, GatewayError> {
        Err(bad_gateway())
    }

    async fn fetch_weekly_plan(&self, _credential: Option<&str>) -> Result<WeeklyPlan, GatewayError> {
        Err(bad_gateway())
    }

    async fn send_chat(
        &self,
        _user_message: &str,
        _current_plan: Option<&WeeklyPlan>,
        _credential: Option<&str>,
    ) -> Result<ChatReply, GatewayError> {
        Err(bad_gateway())
    }

    async fn start_external_auth(&self) -> Result<AuthStart, GatewayError> {
        Err(bad_gateway())
    }

    async fn fetch_external_assignments(
        &self,
        _credential: &str,
    ) -> Result<Vec<Assignment>, GatewayError> {
        Err(bad_gateway())
    }
}

/// Gateway that recommends the last item of whatever plan it is sent.
pub struct EchoGateway {
    pub plan: WeeklyPlan,
}

#[async_trait]
impl RemoteGateway for EchoGateway {
    async fn check_health(&self) -> Result<bool, GatewayError> {
        Ok(true)
    }

    async fn fetch_weekly_plan(&self, _credential: Option<&str>) -> Result<WeeklyPlan, GatewayError> {
        Ok(self.plan.clone())
    }

    async fn send_chat(
        &self,
        user_message: &str,
        current_plan: Option<&WeeklyPlan>,
        _credential: Option<&str>,
    ) -> Result<ChatReply, GatewayError> {
        Ok(ChatReply {
            assistant_message: ChatMessage::new(Role::Assistant, format!("echo: {user_message}")),
            best_next_action: current_plan.and_then(|plan| plan.items.last()).cloned(),
        })
    }

    async fn start_external_auth(&self) -> Result<AuthStart, GatewayError> {
        Ok(AuthStart {
            authorization_url: "https://auth.example/start".to_string(),
            state: Some("state-1".to_string()),
        })
    }

    async fn fetch_external_assignments(
        &self,
        _credential: &str,
    ) -> Result<Vec<Assignment>, GatewayError> {
        Ok(Vec::new())
    }
}

/// Helper function to create a store with the given mode and gateway
pub fn create_test_store(use_stub_data: bool, gateway: Arc<dyn RemoteGateway>) -> Store {
    StoreBuilder::new()
        .with_settings(SharedSettings::new(Settings {
            use_stub_data,
            ..Settings::default()
        }))
        .with_gateway(gateway)
        .build()
        .expect("Failed to create store")
}

pub fn sample_plan(items: Vec<PlanItem>) -> WeeklyPlan {
    WeeklyPlan {
        week_start: "2024-06-10".to_string(),
        items,
    }
}
