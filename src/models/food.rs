use serde::{Deserialize, Serialize};

/// A reference serving of a food with fixed nutrition values.
///
/// Catalog entries always use a quantity of 1: one serving of `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTemplate {
    pub name: &'static str,
    pub unit: &'static str,
    pub quantity: f64,
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

impl FoodTemplate {
    /// A single-serving template.
    pub const fn serving(
        name: &'static str,
        unit: &'static str,
        calories: f64,
        protein_grams: f64,
        carbs_grams: f64,
        fat_grams: f64,
    ) -> Self {
        Self {
            name,
            unit,
            quantity: 1.0,
            calories,
            protein_grams,
            carbs_grams,
            fat_grams,
        }
    }

    /// Calories contributed by the template as listed (calories × quantity).
    #[inline]
    pub fn total_calories(&self) -> f64 {
        self.calories * self.quantity
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({} x {}): {} cal, P:{} C:{} F:{}",
            self.name,
            self.quantity,
            self.unit,
            self.calories,
            self.protein_grams,
            self.carbs_grams,
            self.fat_grams
        )
    }
}

/// A food scaled to fit a meal's calorie budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPortion {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}
