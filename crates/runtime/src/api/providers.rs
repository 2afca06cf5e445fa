//! Asynchronous abstraction for sourcing command plans.
//!
//! Runtime users plug in [`PlanProvider`] implementations so a run can be
//! fed from a mission service, a local file, or a test fixture.
use async_trait::async_trait;
use rover_core::CommandPlan;

use super::errors::Result;

/// Trait for supplying the next mission to run.
///
/// Implementations report their own failures as
/// [`RuntimeError::Provider`](super::RuntimeError::Provider).
#[async_trait]
pub trait PlanProvider: Send + Sync {
    async fn provide_plan(&self) -> Result<CommandPlan>;
}

/// A provider that hands out the same plan every time.
/// Useful for testing or replaying a single mission.
pub struct FixedPlanProvider {
    plan: CommandPlan,
}

impl FixedPlanProvider {
    pub fn new(plan: CommandPlan) -> Self {
        Self { plan }
    }
}

#[async_trait]
impl PlanProvider for FixedPlanProvider {
    async fn provide_plan(&self) -> Result<CommandPlan> {
        Ok(self.plan.clone())
    }
}
