//! Credential, external auth and imported-assignment operations.

use log::{debug, info, warn};

use super::Store;
use crate::credentials::SESSION_TOKEN_KEY;

impl Store {
    /// Persists a bearer credential. Blank tokens are ignored.
    pub fn save_credential(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            debug!("Ignoring blank credential");
            return;
        }
        self.credentials.set(SESSION_TOKEN_KEY, token);
        info!("Session credential saved");
    }

    /// Accepts a credential delivered from outside (e.g. an auth redirect)
    /// and refreshes the imported-assignments count with it.
    pub async fn deliver_credential(&self, token: &str) {
        self.save_credential(token);
        self.refresh_imported_assignments_count().await;
    }

    /// Updates the imported-assignments count.
    ///
    /// The count becomes unknown (`None`) in stub mode, without a stored
    /// credential, or when the gateway fails.
    pub async fn refresh_imported_assignments_count(&self) {
        if self.settings.use_stub_data() {
            debug!("Stub mode: imported assignment count unknown");
            self.mutate(|state| {
                state.imported_assignments = None;
                state.degraded = false;
            });
            return;
        }
        let Some(credential) = self.credential() else {
            debug!("No credential: imported assignment count unknown");
            self.mutate(|state| state.imported_assignments = None);
            return;
        };

        match self.gateway.fetch_external_assignments(&credential).await {
            Ok(assignments) => {
                let count = assignments.len();
                info!("{count} assignments imported");
                self.mutate(|state| {
                    state.imported_assignments = Some(count);
                    state.degraded = false;
                });
            }
            Err(e) => {
                warn!("Assignment fetch failed, count unknown: {e}");
                self.mutate(|state| {
                    state.imported_assignments = None;
                    state.degraded = true;
                });
            }
        }
    }

    /// Whether the backend reports itself healthy. Always `false` in stub
    /// mode or when the check fails.
    pub async fn check_health(&self) -> bool {
        if self.settings.use_stub_data() {
            return false;
        }
        match self.gateway.check_health().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!("Health check failed: {e}");
                false
            }
        }
    }

    /// Authorization URL for connecting the external assignment provider.
    pub async fn start_external_auth(&self) -> Option<String> {
        if self.settings.use_stub_data() {
            debug!("Stub mode: external auth unavailable");
            return None;
        }
        match self.gateway.start_external_auth().await {
            Ok(start) => Some(start.authorization_url),
            Err(e) => {
                warn!("Starting external auth failed: {e}");
                None
            }
        }
    }
}
