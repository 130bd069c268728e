use log::debug;

use crate::models::{FoodPortion, FoodTemplate};
use crate::planner::constants::{CALORIE_DECIMALS, PORTION_DECIMALS};
use crate::planner::rounding::round_to;

/// Total calories of a template list as listed.
pub fn template_calories(templates: &[FoodTemplate]) -> f64 {
    templates.iter().map(FoodTemplate::total_calories).sum()
}

/// Factor that brings the template list to `meal_calories`.
///
/// Returns 1.0 when the templates carry no calories (e.g. an empty list).
pub fn scale_factor(meal_calories: f64, templates: &[FoodTemplate]) -> f64 {
    let total = template_calories(templates);
    if total > 0.0 {
        meal_calories / total
    } else {
        1.0
    }
}

/// Scale a single template by `scale`, rounding at the output boundary.
pub fn scale_template(template: &FoodTemplate, scale: f64) -> FoodPortion {
    let factor = template.quantity * scale;
    FoodPortion {
        name: template.name.to_string(),
        unit: template.unit.to_string(),
        quantity: round_to(factor, PORTION_DECIMALS),
        calories: round_to(template.calories * factor, CALORIE_DECIMALS),
        protein_grams: round_to(template.protein_grams * factor, PORTION_DECIMALS),
        carbs_grams: round_to(template.carbs_grams * factor, PORTION_DECIMALS),
        fat_grams: round_to(template.fat_grams * factor, PORTION_DECIMALS),
    }
}

/// Scale every template linearly so the list matches `meal_calories`.
///
/// Each portion is rounded on its own; the rounded calories are not
/// corrected to sum back to the meal total.
pub fn scale_portions(meal_calories: f64, templates: &[FoodTemplate]) -> Vec<FoodPortion> {
    let scale = scale_factor(meal_calories, templates);
    templates
        .iter()
        .map(|template| {
            debug!("scaling {} by {:.4}", template.debug_string(), scale);
            scale_template(template, scale)
        })
        .collect()
}
