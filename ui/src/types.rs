//! Shared types for the planview web UI
//!
//! These types mirror the backend API response structures.

use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Controls the server hands to every step card
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlannerSettings {
    pub reserved_words: Vec<String>,
    pub edits_enabled: bool,
    pub step_delete_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlanSummary {
    pub name: String,
    pub description: Option<String>,
    pub steps_count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<PlanStep>,
}

/// One executable unit of a plan, bound to a skill function
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlanStep {
    pub index: usize,
    pub skill_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ParameterEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}
