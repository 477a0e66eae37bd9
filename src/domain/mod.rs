use async_trait::async_trait;

pub mod plan;

pub use plan::{ParameterEntry, Plan, PlanError, PlanStep, PlanSummary};

#[async_trait]
pub trait PlanPort: Send + Sync {
    async fn list_plans(&self) -> anyhow::Result<Vec<PlanSummary>>;
    async fn get_plan(&self, name: &str) -> Result<Plan, PlanError>;
}
