use crate::models::{Goal, MacroSplit};
use crate::planner::catalog::MealSlot;
use crate::planner::constants::*;

/// Ordered calorie share of each meal. Order is the output order; shares sum to 1.0.
pub const MEAL_SHARES: [(MealSlot, f64); 5] = [
    (MealSlot::Breakfast, 0.20),
    (MealSlot::Lunch, 0.30),
    (MealSlot::AfternoonSnack, 0.15),
    (MealSlot::Dinner, 0.25),
    (MealSlot::LateSnack, 0.10),
];

/// Gram amounts of each macronutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroGrams {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Fixed macro split for a goal.
pub fn macro_split_for(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Lose => LOSE_MACRO_SPLIT,
        Goal::Maintain => MAINTAIN_MACRO_SPLIT,
        Goal::Gain => GAIN_MACRO_SPLIT,
    }
}

/// Meal-share table in output order.
pub fn meal_shares() -> &'static [(MealSlot, f64)] {
    &MEAL_SHARES
}

/// Convert a calorie amount into macro grams under a split.
///
/// Protein and carbs carry 4 kcal/g, fat 9 kcal/g.
pub fn macro_grams(calories: f64, split: &MacroSplit) -> MacroGrams {
    MacroGrams {
        protein: calories * (split.protein / 100.0) / KCAL_PER_GRAM_PROTEIN,
        carbs: calories * (split.carbs / 100.0) / KCAL_PER_GRAM_CARBS,
        fat: calories * (split.fat / 100.0) / KCAL_PER_GRAM_FAT,
    }
}
