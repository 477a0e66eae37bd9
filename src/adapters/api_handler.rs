//! REST endpoints backing the web UI

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::config::Settings;
use crate::domain::{Plan, PlanError, PlanPort, PlanSummary};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
    pub plans: Arc<dyn PlanPort>,
}

/// Generic API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Everything a step card needs from the server besides the plan itself
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlannerSettingsDto {
    pub reserved_words: Vec<String>,
    pub edits_enabled: bool,
    pub step_delete_enabled: bool,
}

/// GET /api/planner/settings
pub async fn get_planner_settings(State(state): State<ApiState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    let dto = PlannerSettingsDto {
        reserved_words: settings.planner.reserved_words.clone(),
        edits_enabled: settings.ui.edits_enabled,
        step_delete_enabled: settings.ui.step_delete_enabled,
    };
    (StatusCode::OK, Json(ApiResponse::success(dto)))
}

/// GET /api/plans
pub async fn list_plans(State(state): State<ApiState>) -> impl IntoResponse {
    match state.plans.list_plans().await {
        Ok(plans) => (StatusCode::OK, Json(ApiResponse::success(plans))),
        Err(e) => {
            error!("Failed to list plans: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<PlanSummary>>::error(e.to_string())),
            )
        }
    }
}

/// GET /api/plans/:name
pub async fn get_plan(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.plans.get_plan(&name).await {
        Ok(plan) => (StatusCode::OK, Json(ApiResponse::success(plan))),
        Err(e @ PlanError::NotFound(_)) => {
            warn!("{}", e);
            (StatusCode::NOT_FOUND, Json(ApiResponse::<Plan>::error(e.to_string())))
        }
    }
}
