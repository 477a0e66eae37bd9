use crate::config::Settings;
use crate::domain::{Plan, PlanError, PlanPort, PlanSummary};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Serves the plans held in the (live-reloaded) settings
pub struct InMemoryPlanHandler {
    settings: Arc<RwLock<Settings>>,
}

impl InMemoryPlanHandler {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl PlanPort for InMemoryPlanHandler {
    async fn list_plans(&self) -> anyhow::Result<Vec<PlanSummary>> {
        let settings = self.settings.read().await;
        Ok(settings.plans.iter().map(PlanSummary::from).collect())
    }

    async fn get_plan(&self, name: &str) -> Result<Plan, PlanError> {
        let settings = self.settings.read().await;
        settings
            .plans
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| PlanError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlannerSettings, ServerSettings, UiSettings};

    fn handler_with(plans: Vec<Plan>) -> InMemoryPlanHandler {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            planner: PlannerSettings::default(),
            ui: UiSettings::default(),
            plans,
        };
        InMemoryPlanHandler::new(Arc::new(RwLock::new(settings)))
    }

    #[tokio::test]
    async fn test_list_and_get_plan() {
        let handler = handler_with(vec![Plan {
            name: "demo".to_string(),
            description: Some("Demo plan".to_string()),
            steps: vec![],
        }]);

        let plans = handler.list_plans().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "demo");

        let plan = handler.get_plan("demo").await.unwrap();
        assert_eq!(plan.description.as_deref(), Some("Demo plan"));
    }

    #[tokio::test]
    async fn test_get_unknown_plan() {
        let handler = handler_with(vec![]);
        let err = handler.get_plan("missing").await.unwrap_err();
        assert!(matches!(err, PlanError::NotFound(name) if name == "missing"));
    }
}
