pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodPortion, FoodTemplate};
pub use plan::{EnergyResult, MacroSplit, MacronutrientSuggestion, MealPlanItem, PlanResult};
pub use profile::{ActivityLevel, Goal, Profile, ProfileRecord, Sex};
