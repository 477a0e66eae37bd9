//! API client for the planview backend

use crate::types::*;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Fetch reserved words and card controls
pub async fn get_planner_settings() -> Result<PlannerSettings, String> {
    let url = format!("{}/planner/settings", API_BASE);
    fetch_json::<PlannerSettings>(&url).await
}

/// List all sample plans
pub async fn list_plans() -> Result<Vec<PlanSummary>, String> {
    let url = format!("{}/plans", API_BASE);
    fetch_json::<Vec<PlanSummary>>(&url).await
}

/// Fetch a single plan by name
pub async fn get_plan(name: &str) -> Result<Plan, String> {
    let url = format!("{}/plans/{}", API_BASE, urlencoding::encode(name));
    fetch_json::<Plan>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
