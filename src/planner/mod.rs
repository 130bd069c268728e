pub mod catalog;
pub mod constants;
pub mod energy;
pub mod macros;
pub mod meals;
pub mod portions;
pub mod rounding;

pub use catalog::{MealSlot, food_templates_for, suggestion_for};
pub use constants::*;
pub use energy::{
    compute_adjustment_percent, compute_bmr, compute_energy, compute_target_calories,
    compute_tdee,
};
pub use macros::{MEAL_SHARES, MacroGrams, macro_grams, macro_split_for, meal_shares};
pub use meals::{BasalSplit, build_plan, generate_plan, macro_suggestion, plan_meals, split_basal};
pub use portions::{scale_factor, scale_portions, template_calories};
