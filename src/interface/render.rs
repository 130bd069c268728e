use std::fmt;

use crate::error::Result;
use crate::models::{Goal, PlanResult};
use crate::planner::catalog::{MealSlot, food_templates_for, suggestion_for};

/// Human-readable report of a plan.
pub struct PlanReport<'a>(pub &'a PlanResult);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f)?;
        writeln!(f, "=== Daily Nutrition Plan ===")?;
        writeln!(f)?;
        writeln!(f, "BMR:             {:>6.0} kcal", plan.bmr)?;
        writeln!(f, "TDEE:            {:>6.0} kcal", plan.tdee)?;
        writeln!(
            f,
            "Target:          {:>6.0} kcal ({}% adjustment)",
            plan.target_calories, plan.adjustment_percent
        )?;
        writeln!(
            f,
            "Basal/remaining: {:>6.0} / {:.0} kcal",
            plan.basal_calories, plan.remaining_calories
        )?;

        let s = &plan.suggestion;
        writeln!(f)?;
        writeln!(
            f,
            "Macros: P {:.0} g ({}%) | C {:.0} g ({}%) | F {:.0} g ({}%)",
            s.protein_grams,
            s.protein_percent,
            s.carbs_grams,
            s.carbs_percent,
            s.fat_grams,
            s.fat_percent
        )?;

        let name_width = plan
            .daily_meals
            .iter()
            .flat_map(|m| m.foods.iter().map(|food| food.name.len()))
            .max()
            .unwrap_or(10);

        for meal in &plan.daily_meals {
            writeln!(f)?;
            writeln!(
                f,
                "--- {} - {:.0} kcal | P {:.0} g  C {:.0} g  F {:.0} g ---",
                meal.meal_name, meal.calories, meal.protein_grams, meal.carbs_grams, meal.fat_grams
            )?;
            writeln!(f, "    {}", meal.suggestion)?;
            for food in &meal.foods {
                writeln!(
                    f,
                    "    {:<width$}  {:>5.1} x {:<15} {:>5.0} kcal  P {:>5.1}  C {:>5.1}  F {:>5.1}",
                    food.name,
                    food.quantity,
                    food.unit,
                    food.calories,
                    food.protein_grams,
                    food.carbs_grams,
                    food.fat_grams,
                    width = name_width
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Meals: {}", plan.daily_meals.len())?;
        writeln!(f, "Total meal calories: {:.0}", plan.total_meal_calories())
    }
}

/// Catalog entries for a set of meals and goals.
pub struct CatalogListing<'a> {
    pub meals: &'a [MealSlot],
    pub goals: &'a [Goal],
}

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &meal in self.meals {
            for &goal in self.goals {
                let templates = food_templates_for(meal, goal);
                writeln!(
                    f,
                    "=== {} / {} ({} items) ===",
                    meal.label(),
                    goal.label(),
                    templates.len()
                )?;
                writeln!(f, "  {}", suggestion_for(meal, goal))?;
                for t in templates {
                    writeln!(
                        f,
                        "  {} ({}) - {} cal, P:{} C:{} F:{}",
                        t.name, t.unit, t.calories, t.protein_grams, t.carbs_grams, t.fat_grams
                    )?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Format a plan as a human-readable report.
pub fn format_plan(plan: &PlanResult) -> String {
    PlanReport(plan).to_string()
}

/// Print a plan in table form.
pub fn display_plan(plan: &PlanResult) {
    println!("{}", PlanReport(plan));
}

/// Print a plan as pretty JSON.
pub fn display_plan_json(plan: &PlanResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

/// Format catalog entries for the given meals and goals.
pub fn format_catalog(meals: &[MealSlot], goals: &[Goal]) -> String {
    CatalogListing { meals, goals }.to_string()
}

/// Print catalog entries for the given meals and goals.
pub fn display_catalog(meals: &[MealSlot], goals: &[Goal]) {
    print!("{}", CatalogListing { meals, goals });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Profile, Sex};
    use crate::planner::generate_plan;

    #[test]
    fn test_format_plan_lists_every_meal() {
        let profile = Profile::new(
            30,
            Sex::Male,
            80.0,
            180.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
            None,
        )
        .unwrap();
        let text = format_plan(&generate_plan(&profile));

        for meal in MealSlot::ALL {
            assert!(text.contains(meal.label()), "missing {}", meal.label());
        }
        assert!(text.contains("Total meal calories: 1709"));
        assert!(text.contains("Boiled egg"));
        assert!(text.trim_end().ends_with("Total meal calories: 1709"));
    }

    #[test]
    fn test_plan_report_matches_format_plan() {
        let profile = Profile::new(
            25,
            Sex::Female,
            60.0,
            165.0,
            ActivityLevel::ModeratelyActive,
            Goal::Gain,
            None,
        )
        .unwrap();
        let plan = generate_plan(&profile);
        let out = format!("{}", PlanReport(&plan));
        assert_eq!(out, format_plan(&plan));
        assert!(out.contains("Smoothie (milk + oats)"));
    }

    #[test]
    fn test_format_catalog_single_meal() {
        let text = format_catalog(&[MealSlot::LateSnack], &[Goal::Maintain]);
        assert!(text.contains("Late Snack / Maintain (1 items)"));
        assert!(text.contains("Small yogurt (100g) - 60 cal"));
        assert!(!text.contains("Breakfast"));
    }
}
