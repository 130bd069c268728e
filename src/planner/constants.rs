use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, MacroSplit};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor equation
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_FACTOR: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_FACTOR: f64 = 5.0;

pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity and goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplier used when an activity level has no table entry.
pub const FALLBACK_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Deficit applied for `Goal::Lose` when no positive adjustment is given.
pub const DEFAULT_LOSE_ADJUSTMENT_PERCENT: f64 = 20.0;

/// Surplus applied for `Goal::Gain` when no positive adjustment is given.
pub const DEFAULT_GAIN_ADJUSTMENT_PERCENT: f64 = 10.0;

/// Adjustment applied for `Goal::Maintain` when none is given.
pub const DEFAULT_MAINTAIN_ADJUSTMENT_PERCENT: f64 = 0.0;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::LightlyActive, 1.375);
    m.insert(ActivityLevel::ModeratelyActive, 1.55);
    m.insert(ActivityLevel::VeryActive, 1.725);
    m.insert(ActivityLevel::ExtraActive, 1.9);
    m
});

// ─────────────────────────────────────────────────────────────────────────────
// Macronutrients
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// (protein, carbs, fat) percentage splits per goal.
pub const LOSE_MACRO_SPLIT: MacroSplit = MacroSplit::new(30.0, 40.0, 30.0);
pub const MAINTAIN_MACRO_SPLIT: MacroSplit = MacroSplit::new(25.0, 45.0, 30.0);
pub const GAIN_MACRO_SPLIT: MacroSplit = MacroSplit::new(25.0, 50.0, 25.0);

// ─────────────────────────────────────────────────────────────────────────────
// Output rounding
// ─────────────────────────────────────────────────────────────────────────────

/// Decimals kept for calories and whole-day/meal grams.
pub const CALORIE_DECIMALS: i32 = 0;

/// Decimals kept for portion quantities and portion grams.
pub const PORTION_DECIMALS: i32 = 1;

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS
        .get(&level)
        .unwrap_or(&FALLBACK_ACTIVITY_MULTIPLIER)
}
