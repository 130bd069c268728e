pub mod batch;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{MealPlanItem, PlanResult, Profile};
pub use planner::generate_plan;
