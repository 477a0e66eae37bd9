//! # planview - plan step viewer
//!
//! Serves the planview web UI, which renders each step of an AI-generated
//! execution plan as an editable card, together with the small REST API the
//! cards read from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use planview::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("{} plans loaded", settings.plans.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **Domain**: plan model and the `PlanPort` seam
//! - **Adapters**: HTTP handlers and the embedded UI
//! - **Config**: settings loading, validation and live reload

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::plan_handler::InMemoryPlanHandler;
use crate::config::Settings;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(settings: Arc<RwLock<Settings>>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let public_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_state = ApiState {
        settings: settings.clone(),
        plans: Arc::new(InMemoryPlanHandler::new(settings)),
    };

    let api_router = Router::new()
        .route("/planner/settings", get(api_handler::get_planner_settings))
        .route("/plans", get(api_handler::list_plans))
        .route("/plans/:name", get(api_handler::get_plan))
        .with_state(api_state);

    public_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
