//! Builder for creating and configuring Store instances.

use std::sync::Arc;

use super::Store;
use crate::{
    config::SharedSettings,
    credentials::{CredentialStore, MemoryCredentialStore},
    error::Result,
    gateway::{HttpGateway, RemoteGateway},
};

/// Builder for creating and configuring Store instances.
#[derive(Clone, Default)]
pub struct StoreBuilder {
    settings: Option<SharedSettings>,
    gateway: Option<Arc<dyn RemoteGateway>>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the settings handle. Defaults to [`crate::config::Settings::default`].
    pub fn with_settings(mut self, settings: SharedSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the remote gateway. Defaults to an [`HttpGateway`] reading the
    /// same settings handle.
    pub fn with_gateway(mut self, gateway: Arc<dyn RemoteGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sets the credential store. Defaults to an in-memory store.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Configuration` if the default HTTP gateway cannot
    /// be created
    pub fn build(self) -> Result<Store> {
        let settings = self.settings.unwrap_or_default();
        let gateway = match self.gateway {
            Some(gateway) => gateway,
            None => Arc::new(HttpGateway::new(settings.clone())?),
        };
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));

        Ok(Store::new(settings, gateway, credentials))
    }
}
