//! Static food catalog and meal suggestions.
//!
//! Both tables are keyed by `(MealSlot, Goal)` and cover all 15
//! combinations. Each food entry is one reference serving.

use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::models::{FoodTemplate, Goal};

/// Minimum Jaro-Winkler similarity for a fuzzy meal-name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// The five daily meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    AfternoonSnack,
    Dinner,
    LateSnack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
        MealSlot::LateSnack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::LateSnack => "Late Snack",
        }
    }

    /// Exact, case-insensitive lookup by label.
    pub fn from_name(name: &str) -> Option<MealSlot> {
        let name = name.trim().to_lowercase();
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.label().to_lowercase() == name)
    }

    /// Closest meal labels to `input`, best match first.
    pub fn suggest(input: &str) -> Vec<MealSlot> {
        let input = input.trim().to_lowercase();
        let mut candidates: Vec<(MealSlot, f64)> = MealSlot::ALL
            .into_iter()
            .map(|slot| (slot, jaro_winkler(&slot.label().to_lowercase(), &input)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(slot, _)| slot).collect()
    }
}

const BREAKFAST_LOSE: &[FoodTemplate] = &[
    FoodTemplate::serving("Boiled egg", "unit", 78.0, 6.0, 0.6, 5.3),
    FoodTemplate::serving("Whole-grain bread", "slice", 70.0, 3.5, 12.0, 1.0),
    FoodTemplate::serving("Red berries", "serving (100g)", 50.0, 0.7, 12.0, 0.3),
];

const BREAKFAST_GAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Oats", "40g", 150.0, 5.0, 27.0, 3.0),
    FoodTemplate::serving("Whole milk", "200ml", 122.0, 6.4, 12.0, 4.8),
    FoodTemplate::serving("Banana", "unit", 105.0, 1.3, 27.0, 0.4),
];

const BREAKFAST_MAINTAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Plain yogurt", "170g", 100.0, 6.0, 12.0, 3.5),
    FoodTemplate::serving("Granola", "30g", 130.0, 3.0, 18.0, 5.0),
    FoodTemplate::serving("Fruit", "unit", 60.0, 0.6, 15.0, 0.2),
];

const LUNCH_LOSE: &[FoodTemplate] = &[
    FoodTemplate::serving("Grilled chicken breast", "100g", 165.0, 31.0, 0.0, 3.6),
    FoodTemplate::serving("Cooked brown rice", "100g", 110.0, 2.6, 23.0, 0.9),
    FoodTemplate::serving("Salad", "100g", 20.0, 1.0, 3.0, 0.2),
];

const LUNCH_GAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Cooked red meat", "150g", 330.0, 26.0, 0.0, 24.0),
    FoodTemplate::serving("Cooked white rice", "150g", 195.0, 4.0, 43.0, 0.6),
    FoodTemplate::serving("Beans", "100g", 127.0, 8.7, 22.8, 0.5),
];

const LUNCH_MAINTAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Chicken breast", "100g", 165.0, 31.0, 0.0, 3.6),
    FoodTemplate::serving("Brown rice", "150g", 165.0, 3.9, 34.5, 1.4),
    FoodTemplate::serving("Salad/Vegetables", "150g", 40.0, 2.0, 6.0, 0.5),
];

const AFTERNOON_SNACK_LOSE: &[FoodTemplate] = &[
    FoodTemplate::serving("Plain yogurt", "170g", 100.0, 6.0, 12.0, 3.5),
    FoodTemplate::serving("Nuts", "30g", 180.0, 4.0, 6.0, 16.0),
];

const AFTERNOON_SNACK_GAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Sandwich", "1 serving", 350.0, 20.0, 35.0, 12.0),
    FoodTemplate::serving("Fruit", "unit", 60.0, 0.6, 15.0, 0.2),
];

const AFTERNOON_SNACK_MAINTAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Fruits", "1 serving", 80.0, 1.0, 20.0, 0.5),
    FoodTemplate::serving("Mixed nuts", "30g", 180.0, 4.0, 6.0, 16.0),
];

const DINNER_LOSE: &[FoodTemplate] = &[
    FoodTemplate::serving("Baked fish", "100g", 206.0, 22.0, 0.0, 12.0),
    FoodTemplate::serving("Steamed vegetables", "150g", 50.0, 2.5, 10.0, 0.5),
];

const DINNER_GAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Cooked whole-wheat pasta", "200g", 260.0, 9.0, 52.0, 2.0),
    FoodTemplate::serving("Grilled chicken", "150g", 247.0, 46.5, 0.0, 5.3),
];

const DINNER_MAINTAIN: &[FoodTemplate] = &[
    FoodTemplate::serving("Light protein option", "100g", 150.0, 20.0, 5.0, 5.0),
    FoodTemplate::serving("Vegetables", "150g", 40.0, 2.0, 8.0, 0.5),
];

const LATE_SNACK_LOSE: &[FoodTemplate] = &[FoodTemplate::serving(
    "Cottage cheese",
    "100g",
    98.0,
    11.1,
    3.4,
    4.3,
)];

const LATE_SNACK_GAIN: &[FoodTemplate] = &[FoodTemplate::serving(
    "Smoothie (milk + oats)",
    "1 serving",
    250.0,
    10.0,
    35.0,
    6.0,
)];

const LATE_SNACK_MAINTAIN: &[FoodTemplate] = &[FoodTemplate::serving(
    "Small yogurt",
    "100g",
    60.0,
    3.5,
    7.0,
    1.5,
)];

/// Map from (meal, goal) to the reference food list.
pub static FOOD_CATALOG: LazyLock<HashMap<(MealSlot, Goal), &'static [FoodTemplate]>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert((MealSlot::Breakfast, Goal::Lose), BREAKFAST_LOSE);
        m.insert((MealSlot::Breakfast, Goal::Gain), BREAKFAST_GAIN);
        m.insert((MealSlot::Breakfast, Goal::Maintain), BREAKFAST_MAINTAIN);
        m.insert((MealSlot::Lunch, Goal::Lose), LUNCH_LOSE);
        m.insert((MealSlot::Lunch, Goal::Gain), LUNCH_GAIN);
        m.insert((MealSlot::Lunch, Goal::Maintain), LUNCH_MAINTAIN);
        m.insert((MealSlot::AfternoonSnack, Goal::Lose), AFTERNOON_SNACK_LOSE);
        m.insert((MealSlot::AfternoonSnack, Goal::Gain), AFTERNOON_SNACK_GAIN);
        m.insert((MealSlot::AfternoonSnack, Goal::Maintain), AFTERNOON_SNACK_MAINTAIN);
        m.insert((MealSlot::Dinner, Goal::Lose), DINNER_LOSE);
        m.insert((MealSlot::Dinner, Goal::Gain), DINNER_GAIN);
        m.insert((MealSlot::Dinner, Goal::Maintain), DINNER_MAINTAIN);
        m.insert((MealSlot::LateSnack, Goal::Lose), LATE_SNACK_LOSE);
        m.insert((MealSlot::LateSnack, Goal::Gain), LATE_SNACK_GAIN);
        m.insert((MealSlot::LateSnack, Goal::Maintain), LATE_SNACK_MAINTAIN);
        m
    });

/// Map from (meal, goal) to a short description of example foods.
pub static MEAL_SUGGESTIONS: LazyLock<HashMap<(MealSlot, Goal), &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert(
            (MealSlot::Breakfast, Goal::Lose),
            "Scrambled eggs, tapioca or whole-grain bread, red berries",
        );
        m.insert(
            (MealSlot::Lunch, Goal::Lose),
            "Grilled chicken breast, salad, brown rice, vegetables",
        );
        m.insert(
            (MealSlot::AfternoonSnack, Goal::Lose),
            "Plain yogurt, nuts or a piece of fruit",
        );
        m.insert(
            (MealSlot::Dinner, Goal::Lose),
            "Baked fish, salad and steamed vegetables",
        );
        m.insert(
            (MealSlot::LateSnack, Goal::Lose),
            "Cottage cheese or protein yogurt",
        );

        m.insert(
            (MealSlot::Breakfast, Goal::Gain),
            "Oats with milk, banana, eggs",
        );
        m.insert(
            (MealSlot::Lunch, Goal::Gain),
            "Rice, beans, red meat, vegetables",
        );
        m.insert(
            (MealSlot::AfternoonSnack, Goal::Gain),
            "Sandwich with turkey breast and cheese",
        );
        m.insert(
            (MealSlot::Dinner, Goal::Gain),
            "Whole-wheat pasta with sauce and chicken",
        );
        m.insert((MealSlot::LateSnack, Goal::Gain), "Milk smoothie with oats");

        m.insert((MealSlot::Breakfast, Goal::Maintain), "Yogurt, granola, fruit");
        m.insert(
            (MealSlot::Lunch, Goal::Maintain),
            "Lean meat, brown rice, salad",
        );
        m.insert((MealSlot::AfternoonSnack, Goal::Maintain), "Fruit and nuts");
        m.insert(
            (MealSlot::Dinner, Goal::Maintain),
            "Light option with protein and vegetables",
        );
        m.insert(
            (MealSlot::LateSnack, Goal::Maintain),
            "Tea and whole-grain toast",
        );
        m
    });

/// Reference foods for a meal and goal; empty if the pair has no entry.
pub fn food_templates_for(meal: MealSlot, goal: Goal) -> &'static [FoodTemplate] {
    FOOD_CATALOG.get(&(meal, goal)).copied().unwrap_or(&[])
}

/// Suggestion text for a meal and goal, falling back to a per-goal default.
pub fn suggestion_for(meal: MealSlot, goal: Goal) -> &'static str {
    MEAL_SUGGESTIONS
        .get(&(meal, goal))
        .copied()
        .unwrap_or_else(|| fallback_suggestion(goal))
}

/// Suggestion used when a (meal, goal) pair has no entry.
pub fn fallback_suggestion(goal: Goal) -> &'static str {
    match goal {
        Goal::Gain => "Calorie-dense, nutritious foods",
        Goal::Lose | Goal::Maintain => "Balanced foods",
    }
}
