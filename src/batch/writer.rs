use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::PlanResult;

/// One CSV output row: a single meal of a single profile's plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanRow<'a> {
    pub record: usize,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub meal: &'a str,
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub foods: String,
}

/// Write one row per (profile, meal). Returns the number of rows written.
pub fn write_plan_rows<P: AsRef<Path>>(path: P, plans: &[(usize, PlanResult)]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut rows = 0;

    for (record, plan) in plans {
        for meal in &plan.daily_meals {
            let foods = meal
                .foods
                .iter()
                .map(|f| format!("{} {} x {}", f.name, f.quantity, f.unit))
                .collect::<Vec<_>>()
                .join("; ");

            writer.serialize(PlanRow {
                record: *record,
                bmr: plan.bmr,
                tdee: plan.tdee,
                target_calories: plan.target_calories,
                meal: &meal.meal_name,
                calories: meal.calories,
                protein_grams: meal.protein_grams,
                carbs_grams: meal.carbs_grams,
                fat_grams: meal.fat_grams,
                foods,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Save a plan as pretty-printed JSON.
pub fn save_plan_json<P: AsRef<Path>>(path: P, plan: &PlanResult) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
