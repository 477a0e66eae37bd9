pub mod plan_step_card;
pub mod plan_step_input;
pub mod plan_viewer;
pub mod plans;
