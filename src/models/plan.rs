use serde::{Deserialize, Serialize};

use crate::models::food::FoodPortion;

/// Unrounded energy figures derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyResult {
    pub bmr: f64,
    pub tdee: f64,
    /// Adjustment percent actually applied after goal defaults.
    pub adjustment_percent: f64,
    pub target_calories: f64,
}

/// Share of daily calories from each macronutrient, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Whole-day macro breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacronutrientSuggestion {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

/// One meal of the daily plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanItem {
    pub meal_name: String,
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,

    /// Part of the meal covering basal needs.
    pub basal_calories: f64,

    /// Part of the meal above (or below) basal needs.
    pub remaining_calories: f64,

    /// Short textual suggestion of example foods.
    pub suggestion: String,

    pub foods: Vec<FoodPortion>,
}

/// The full daily plan returned for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub adjustment_percent: f64,
    pub basal_calories: f64,
    pub remaining_calories: f64,
    pub suggestion: MacronutrientSuggestion,
    pub daily_meals: Vec<MealPlanItem>,
}

impl PlanResult {
    /// Sum of the (rounded) meal calories.
    pub fn total_meal_calories(&self) -> f64 {
        self.daily_meals.iter().map(|m| m.calories).sum()
    }
}
