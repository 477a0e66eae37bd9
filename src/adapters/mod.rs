pub mod api_handler;
pub mod health_handler;
pub mod plan_handler;
pub mod ui_handler;
