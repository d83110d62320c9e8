//! Weekly plan loading for the Store.

use log::{debug, info, warn};

use super::Store;
use crate::stub;

impl Store {
    /// Replaces the weekly plan and clears the chat override.
    ///
    /// In stub mode the plan is generated locally. In live mode the gateway
    /// is asked first; if it fails for any reason the same stub plan is used,
    /// so a plan is always present once this returns. Concurrent loads are
    /// not cancelled: the last one to finish wins.
    pub async fn load_weekly_plan(&self) {
        if self.settings.use_stub_data() {
            debug!("Stub mode: generating weekly plan locally");
            let plan = stub::generate_weekly_plan();
            self.mutate(|state| {
                state.plan.replace(plan);
                state.degraded = false;
            });
            return;
        }

        let credential = self.credential();
        match self.gateway.fetch_weekly_plan(credential.as_deref()).await {
            Ok(plan) => {
                info!(
                    "Loaded weekly plan for week of {} ({} items)",
                    plan.week_start,
                    plan.items.len()
                );
                self.mutate(|state| {
                    state.plan.replace(plan);
                    state.degraded = false;
                });
            }
            Err(e) => {
                warn!("Weekly plan fetch failed, using stub plan: {e}");
                let plan = stub::generate_weekly_plan();
                self.mutate(|state| {
                    state.plan.replace(plan);
                    state.degraded = true;
                });
            }
        }
    }
}
