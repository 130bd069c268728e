use log::debug;

use crate::models::{ActivityLevel, EnergyResult, Goal, Profile, Sex};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// `10 × weight + 6.25 × height − 5 × age + (5 | −161)`
pub fn compute_bmr(profile: &Profile) -> f64 {
    let sex_offset = match profile.sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };

    BMR_WEIGHT_FACTOR * profile.weight_kg + BMR_HEIGHT_FACTOR * profile.height_cm
        - BMR_AGE_FACTOR * profile.age as f64
        + sex_offset
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Resolve the calorie adjustment percent for a goal.
///
/// For `Lose` and `Gain` only a strictly positive value counts as provided;
/// an explicit 0 falls back to the goal default just like a missing value.
/// `Maintain` takes any provided value as is.
pub fn compute_adjustment_percent(goal: Goal, adjustment_percent: Option<f64>) -> f64 {
    match goal {
        Goal::Lose => adjustment_percent
            .filter(|&p| p > 0.0)
            .unwrap_or(DEFAULT_LOSE_ADJUSTMENT_PERCENT),
        Goal::Gain => adjustment_percent
            .filter(|&p| p > 0.0)
            .unwrap_or(DEFAULT_GAIN_ADJUSTMENT_PERCENT),
        Goal::Maintain => adjustment_percent.unwrap_or(DEFAULT_MAINTAIN_ADJUSTMENT_PERCENT),
    }
}

/// Apply the adjustment to TDEE: a surplus for `Gain`, a deficit otherwise.
pub fn compute_target_calories(tdee: f64, goal: Goal, adjustment_percent: f64) -> f64 {
    match goal {
        Goal::Gain => tdee * (1.0 + adjustment_percent / 100.0),
        Goal::Lose | Goal::Maintain => tdee * (1.0 - adjustment_percent / 100.0),
    }
}

/// Run the energy chain for a profile.
pub fn compute_energy(profile: &Profile) -> EnergyResult {
    let bmr = compute_bmr(profile);
    let tdee = compute_tdee(bmr, profile.activity_level);
    let adjustment_percent = compute_adjustment_percent(profile.goal, profile.adjustment_percent);
    let target_calories = compute_target_calories(tdee, profile.goal, adjustment_percent);

    debug!(
        "energy: bmr={:.2} tdee={:.2} adjustment={}% target={:.2} ({:?})",
        bmr, tdee, adjustment_percent, target_calories, profile.goal
    );

    EnergyResult {
        bmr,
        tdee,
        adjustment_percent,
        target_calories,
    }
}
