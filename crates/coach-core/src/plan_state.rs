//! Current weekly plan plus the conversational recommendation override.

use crate::{
    models::{PlanItem, WeeklyPlan},
    resolver,
};

/// Holds the plan exclusively; a plan is only ever swapped in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanState {
    weekly_plan: Option<WeeklyPlan>,
    chat_override: Option<PlanItem>,
}

impl PlanState {
    /// Installs a freshly loaded plan and forgets any chat override.
    pub fn replace(&mut self, plan: WeeklyPlan) {
        self.weekly_plan = Some(plan);
        self.chat_override = None;
    }

    /// Installs a plan only if none is present, keeping the override.
    ///
    /// Returns whether the plan was installed.
    pub fn seed(&mut self, plan: WeeklyPlan) -> bool {
        if self.weekly_plan.is_some() {
            return false;
        }
        self.weekly_plan = Some(plan);
        true
    }

    /// Sets (or clears, with `None`) the recommendation coming from chat.
    pub fn set_override(&mut self, item: Option<PlanItem>) {
        self.chat_override = item;
    }

    pub fn weekly_plan(&self) -> Option<&WeeklyPlan> {
        self.weekly_plan.as_ref()
    }

    pub fn chat_override(&self) -> Option<&PlanItem> {
        self.chat_override.as_ref()
    }

    /// Recommendation derived from the override and the plan.
    pub fn best_next_action(&self) -> Option<&PlanItem> {
        resolver::best_next_action(self.chat_override(), self.weekly_plan())
    }
}
