use log::debug;

use crate::models::{
    EnergyResult, Goal, MacroSplit, MacronutrientSuggestion, MealPlanItem, PlanResult, Profile,
};
use crate::planner::catalog::{food_templates_for, suggestion_for};
use crate::planner::energy::compute_energy;
use crate::planner::macros::{macro_grams, macro_split_for, meal_shares};
use crate::planner::portions::scale_portions;
use crate::planner::rounding::round_whole;

/// Target calories split into the part covering BMR and the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasalSplit {
    pub basal: f64,
    pub remaining: f64,
}

/// Split target calories into basal and remaining parts.
///
/// When the target falls below BMR the whole target is counted as basal
/// and nothing remains.
pub fn split_basal(bmr: f64, target_calories: f64) -> BasalSplit {
    let remaining = target_calories - bmr;
    if remaining < 0.0 {
        return BasalSplit {
            basal: target_calories,
            remaining: 0.0,
        };
    }
    BasalSplit {
        basal: bmr,
        remaining,
    }
}

/// Whole-day macro breakdown of the target calories.
pub fn macro_suggestion(target_calories: f64, split: &MacroSplit) -> MacronutrientSuggestion {
    let grams = macro_grams(target_calories, split);
    MacronutrientSuggestion {
        calories: round_whole(target_calories),
        protein_grams: round_whole(grams.protein),
        carbs_grams: round_whole(grams.carbs),
        fat_grams: round_whole(grams.fat),
        protein_percent: split.protein,
        carbs_percent: split.carbs,
        fat_percent: split.fat,
    }
}

/// Allocate the basal/remaining split across the five meals.
pub fn plan_meals(split: BasalSplit, goal: Goal) -> Vec<MealPlanItem> {
    let macro_split = macro_split_for(goal);

    meal_shares()
        .iter()
        .map(|&(meal, share)| {
            let meal_basal = split.basal * share;
            let meal_remaining = split.remaining * share;
            let meal_calories = meal_basal + meal_remaining;
            let grams = macro_grams(meal_calories, &macro_split);

            let foods = scale_portions(meal_calories, food_templates_for(meal, goal));

            debug!(
                "{}: {:.2} kcal (basal {:.2}, remaining {:.2}), {} foods",
                meal.label(),
                meal_calories,
                meal_basal,
                meal_remaining,
                foods.len()
            );

            MealPlanItem {
                meal_name: meal.label().to_string(),
                calories: round_whole(meal_calories),
                protein_grams: round_whole(grams.protein),
                carbs_grams: round_whole(grams.carbs),
                fat_grams: round_whole(grams.fat),
                basal_calories: round_whole(meal_basal),
                remaining_calories: round_whole(meal_remaining),
                suggestion: suggestion_for(meal, goal).to_string(),
                foods,
            }
        })
        .collect()
}

/// Build the plan from already computed energy figures.
pub fn build_plan(energy: &EnergyResult, goal: Goal) -> PlanResult {
    let split = split_basal(energy.bmr, energy.target_calories);
    let macro_split = macro_split_for(goal);

    PlanResult {
        bmr: round_whole(energy.bmr),
        tdee: round_whole(energy.tdee),
        target_calories: round_whole(energy.target_calories),
        adjustment_percent: energy.adjustment_percent,
        basal_calories: round_whole(split.basal),
        remaining_calories: round_whole(split.remaining),
        suggestion: macro_suggestion(energy.target_calories, &macro_split),
        daily_meals: plan_meals(split, goal),
    }
}

/// Compute the full daily plan for a validated profile.
pub fn generate_plan(profile: &Profile) -> PlanResult {
    let energy = compute_energy(profile);
    build_plan(&energy, profile.goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};

    fn reference_profile() -> Profile {
        Profile {
            age: 30,
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Lose,
            adjustment_percent: None,
        }
    }

    #[test]
    fn test_split_basal_positive_remaining() {
        let split = split_basal(1500.0, 2000.0);
        assert_eq!(split.basal, 1500.0);
        assert_eq!(split.remaining, 500.0);
    }

    #[test]
    fn test_split_basal_clamps_below_bmr() {
        let split = split_basal(1780.0, 1708.8);
        assert_eq!(split.basal, 1708.8);
        assert_eq!(split.remaining, 0.0);
    }

    #[test]
    fn test_split_basal_equal() {
        let split = split_basal(1800.0, 1800.0);
        assert_eq!(split.basal, 1800.0);
        assert_eq!(split.remaining, 0.0);
    }

    #[test]
    fn test_macro_suggestion_reference() {
        let suggestion = macro_suggestion(1708.8, &macro_split_for(Goal::Lose));
        assert_eq!(suggestion.calories, 1709.0);
        assert_eq!(suggestion.protein_grams, 128.0);
        assert_eq!(suggestion.carbs_grams, 171.0);
        assert_eq!(suggestion.fat_grams, 57.0);
        assert_eq!(suggestion.protein_percent, 30.0);
        assert_eq!(suggestion.carbs_percent, 40.0);
        assert_eq!(suggestion.fat_percent, 30.0);
    }

    #[test]
    fn test_generate_plan_reference() {
        let plan = generate_plan(&reference_profile());
        assert_eq!(plan.bmr, 1780.0);
        assert_eq!(plan.tdee, 2136.0);
        assert_eq!(plan.target_calories, 1709.0);
        assert_eq!(plan.adjustment_percent, 20.0);

        let names: Vec<&str> = plan.daily_meals.iter().map(|m| m.meal_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Breakfast", "Lunch", "Afternoon Snack", "Dinner", "Late Snack"]
        );

        let calories: Vec<f64> = plan.daily_meals.iter().map(|m| m.calories).collect();
        assert_eq!(calories, vec![342.0, 513.0, 256.0, 427.0, 171.0]);
        assert_eq!(plan.total_meal_calories(), 1709.0);

        let breakfast = &plan.daily_meals[0];
        assert_eq!(breakfast.protein_grams, 26.0);
        assert_eq!(breakfast.carbs_grams, 34.0);
        assert_eq!(breakfast.fat_grams, 11.0);
        assert_eq!(
            breakfast.suggestion,
            "Scrambled eggs, tapioca or whole-grain bread, red berries"
        );
        assert_eq!(breakfast.foods.len(), 3);
    }

    #[test]
    fn test_reference_plan_is_clamped() {
        // 1708.8 < 1780, so every calorie counts as basal
        let plan = generate_plan(&reference_profile());
        assert_eq!(plan.basal_calories, 1709.0);
        assert_eq!(plan.remaining_calories, 0.0);
        assert!(plan.daily_meals.iter().all(|m| m.remaining_calories == 0.0));
    }

    #[test]
    fn test_plan_meals_without_clamp() {
        let split = BasalSplit {
            basal: 1500.0,
            remaining: 500.0,
        };
        let meals = plan_meals(split, Goal::Gain);
        assert_eq!(meals.len(), 5);
        assert_eq!(meals[0].basal_calories, 300.0);
        assert_eq!(meals[0].remaining_calories, 100.0);
        assert_eq!(meals[0].calories, 400.0);
        assert_eq!(meals[1].calories, 600.0);
        // 25% of 400 kcal / 4
        assert_eq!(meals[0].protein_grams, 25.0);
    }
}
