use std::collections::HashSet;
use thiserror::Error;

use crate::config::{PlannerSettings, ServerSettings, Settings};
use crate::domain::Plan;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_planner(&settings.planner) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_plans(&settings.plans) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_planner(planner: &PlannerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (idx, word) in planner.reserved_words.iter().enumerate() {
            if word.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    field: format!("planner.reserved_words[{}]", idx),
                    reason: "Reserved word must not be blank".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_plans(plans: &[Plan]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut names = HashSet::new();

        for (idx, plan) in plans.iter().enumerate() {
            if plan.name.is_empty() {
                errors.push(ValidationError::MissingField(format!("plans[{}].name", idx)));
            } else if !names.insert(&plan.name) {
                errors.push(ValidationError::Duplicate(format!("plan name '{}'", plan.name)));
            }

            let mut indexes = HashSet::new();
            for step in &plan.steps {
                if !indexes.insert(step.index) {
                    errors.push(ValidationError::Duplicate(format!(
                        "step index {} ({}) in plan '{}'",
                        step.index,
                        step.qualified_name(),
                        plan.name
                    )));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiSettings;
    use crate::domain::PlanStep;

    fn step(index: usize) -> PlanStep {
        PlanStep {
            index,
            skill_name: "WriterSkill".to_string(),
            name: "Summarize".to_string(),
            description: None,
            parameters: vec![],
            outputs: vec![],
        }
    }

    fn settings(plans: Vec<Plan>) -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            planner: PlannerSettings::default(),
            ui: UiSettings::default(),
            plans,
        }
    }

    #[test]
    fn test_valid_settings() {
        let plan = Plan {
            name: "demo".to_string(),
            description: None,
            steps: vec![step(0), step(1)],
        };
        assert!(ConfigValidator::validate(&settings(vec![plan])).is_ok());
    }

    #[test]
    fn test_invalid_server() {
        let mut s = settings(vec![]);
        s.server.host = String::new();
        s.server.port = 0;

        let errors = ConfigValidator::validate(&s).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_blank_reserved_word() {
        let mut s = settings(vec![]);
        s.planner.reserved_words.push("  ".to_string());

        let errors = ConfigValidator::validate(&s).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("planner.reserved_words[2]"));
    }

    #[test]
    fn test_duplicate_plans_and_step_indexes() {
        let plan = Plan {
            name: "demo".to_string(),
            description: None,
            steps: vec![step(0), step(0)],
        };
        let errors = ConfigValidator::validate(&settings(vec![plan.clone(), Plan {
            steps: vec![],
            ..plan
        }]))
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.to_string().contains("step index 0")));
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("(WriterSkill.Summarize) in plan 'demo'")));
        assert!(errors.iter().any(|e| e.to_string().contains("plan name 'demo'")));
    }
}
