//! HTTP implementation of the remote data gateway.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize};

use super::RemoteGateway;
use crate::{
    config::SharedSettings,
    error::{GatewayError, ResultExt},
    models::{Assignment, AuthStart, ChatReply, ChatRequest, WeeklyPlan},
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
}

/// Gateway backed by the coaching backend's JSON API.
///
/// The base address is read from the shared settings on every request.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: Client,
    settings: SharedSettings,
}

impl HttpGateway {
    /// Creates a gateway with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Configuration` if the HTTP client cannot be built
    pub fn new(settings: SharedSettings) -> crate::Result<Self> {
        Self::with_timeout(settings, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(settings: SharedSettings, timeout: Duration) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .with_context("Failed to build HTTP client")?;
        Ok(Self { http, settings })
    }

    /// Resolves `path` against the configured base address.
    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        let mut base = self.settings.base_url();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|_| GatewayError::InvalidUrl { url: base })
    }

    /// Sends the request and decodes a 2xx JSON body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await.map_err(GatewayError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            debug!("Gateway answered {status} for {}", response.url());
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(GatewayError::Transport)?;
        serde_json::from_slice(&body).map_err(GatewayError::Decoding)
    }
}

fn with_bearer(request: RequestBuilder, credential: Option<&str>) -> RequestBuilder {
    match credential {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn check_health(&self) -> Result<bool, GatewayError> {
        let request = self.http.get(self.url("health")?);
        let health: HealthResponse = self.execute(request).await?;
        Ok(health.status == "ok")
    }

    async fn fetch_weekly_plan(&self, credential: Option<&str>) -> Result<WeeklyPlan, GatewayError> {
        let request = with_bearer(self.http.get(self.url("plan/week")?), credential);
        self.execute(request).await
    }

    async fn send_chat(
        &self,
        user_message: &str,
        current_plan: Option<&WeeklyPlan>,
        credential: Option<&str>,
    ) -> Result<ChatReply, GatewayError> {
        let body = ChatRequest {
            user_message: user_message.to_string(),
            current_plan: current_plan.cloned(),
        };
        let request = with_bearer(self.http.post(self.url("chat/send")?), credential).json(&body);
        self.execute(request).await
    }

    async fn start_external_auth(&self) -> Result<AuthStart, GatewayError> {
        let request = self.http.get(self.url("auth/google/start")?);
        self.execute(request).await
    }

    async fn fetch_external_assignments(
        &self,
        credential: &str,
    ) -> Result<Vec<Assignment>, GatewayError> {
        let request = self
            .http
            .get(self.url("classroom/assignments")?)
            .bearer_auth(credential);
        self.execute(request).await
    }
}
