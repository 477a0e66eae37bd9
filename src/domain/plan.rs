//! Plan model as produced by the planner.
//!
//! Field names follow the planner's JSON output, which is why parameter
//! entries use `Key` / `Value`. The lowercase aliases accept plans written
//! inline in `planview.toml`, since the config loader lowercases keys.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan not found: '{0}'")]
    NotFound(String),
}

/// A single input binding of a plan step
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParameterEntry {
    #[serde(rename = "Key", alias = "key")]
    pub key: String,
    #[serde(rename = "Value", alias = "value")]
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanStep {
    pub index: usize,
    pub skill_name: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl PlanStep {
    /// Qualified function name, e.g. `WriterSkill.Summarize`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.skill_name, self.name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Plan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<PlanStep>,
}

/// Lightweight listing entry for a plan
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub name: String,
    pub description: Option<String>,
    pub steps_count: usize,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            steps_count: plan.steps.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_step_uses_planner_field_names() {
        let json = r#"{
            "index": 0,
            "skill_name": "WriterSkill",
            "name": "Summarize",
            "parameters": [{"Key": "input", "Value": "hello"}],
            "outputs": ["SUMMARY"]
        }"#;

        let step: PlanStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.qualified_name(), "WriterSkill.Summarize");
        assert_eq!(step.parameters[0].key, "input");
        assert_eq!(step.parameters[0].value, "hello");
        assert!(step.description.is_none());

        let back = serde_json::to_value(&step).unwrap();
        assert_eq!(back["parameters"][0]["Key"], "input");
        assert!(back.get("description").is_none());
    }

    #[test]
    fn test_plan_summary_counts_steps() {
        let plan = Plan {
            name: "travel".to_string(),
            description: None,
            steps: vec![PlanStep {
                index: 0,
                skill_name: "s".to_string(),
                name: "n".to_string(),
                description: None,
                parameters: vec![],
                outputs: vec![],
            }],
        };
        let summary = PlanSummary::from(&plan);
        assert_eq!(summary.steps_count, 1);
        assert_eq!(summary.name, "travel");
    }
}
