use std::fs;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use nutri_plan_rs::PlanError;
use nutri_plan_rs::batch::run_batch;
use nutri_plan_rs::models::{ActivityLevel, Goal, Profile, Sex};
use nutri_plan_rs::planner::{MealSlot, compute_energy, food_templates_for, generate_plan};

fn random_profile(rng: &mut StdRng) -> Profile {
    let sex = if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };
    let adjustment_percent = if rng.gen_bool(0.3) {
        None
    } else {
        Some(rng.gen_range(0.0..=50.0))
    };

    Profile::new(
        rng.gen_range(10..=120),
        sex,
        rng.gen_range(30.0..=300.0),
        rng.gen_range(100.0..=250.0),
        ActivityLevel::ALL[rng.gen_range(0..ActivityLevel::ALL.len())],
        Goal::ALL[rng.gen_range(0..Goal::ALL.len())],
        adjustment_percent,
    )
    .unwrap()
}

#[test]
fn test_random_profiles_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..500 {
        let profile = random_profile(&mut rng);
        let energy = compute_energy(&profile);
        let plan = generate_plan(&profile);

        assert!(energy.bmr > 0.0, "bmr not positive for {:?}", profile);
        assert!(energy.tdee >= energy.bmr);

        match profile.goal {
            Goal::Gain => assert!(energy.target_calories > energy.tdee),
            Goal::Lose => assert!(energy.target_calories < energy.tdee),
            Goal::Maintain => assert!(energy.target_calories <= energy.tdee),
        }

        assert_eq!(plan.daily_meals.len(), 5);

        // Five meals rounded independently: at most 0.5 each
        let meal_total = plan.total_meal_calories();
        assert!(
            (meal_total - energy.target_calories).abs() <= 2.5 + 1e-9,
            "meal total {} vs target {}",
            meal_total,
            energy.target_calories
        );

        for meal in &plan.daily_meals {
            assert!(!meal.foods.is_empty());
            let food_total: f64 = meal.foods.iter().map(|f| f.calories).sum();
            assert!(
                (food_total - meal.calories).abs() <= meal.foods.len() as f64,
                "{}: foods {} vs meal {}",
                meal.meal_name,
                food_total,
                meal.calories
            );
        }
    }
}

#[test]
fn test_plan_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let profile = random_profile(&mut rng);
    assert_eq!(generate_plan(&profile), generate_plan(&profile));
}

#[test]
fn test_catalog_covers_every_meal_and_goal() {
    for meal in MealSlot::ALL {
        for goal in Goal::ALL {
            assert!(
                !food_templates_for(meal, goal).is_empty(),
                "no templates for {:?}/{:?}",
                meal,
                goal
            );
        }
    }
}

#[test]
fn test_plan_json_shape() {
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
    let value = serde_json::to_value(generate_plan(&profile)).unwrap();

    assert_eq!(value["bmr"], 1780.0);
    assert_eq!(value["tdee"], 2136.0);
    assert_eq!(value["targetCalories"], 1709.0);
    assert_eq!(value["suggestion"]["proteinGrams"], 128.0);
    assert_eq!(value["suggestion"]["proteinPercent"], 30.0);

    let meals = value["dailyMeals"].as_array().unwrap();
    assert_eq!(meals.len(), 5);
    assert_eq!(meals[0]["mealName"], "Breakfast");
    assert_eq!(meals[0]["foods"][0]["name"], "Boiled egg");
    assert_eq!(meals[0]["foods"][0]["quantity"], 1.7);
    assert_eq!(meals[4]["mealName"], "Late Snack");
    assert_eq!(meals[4]["foods"][0]["name"], "Cottage cheese");
}

#[test]
fn test_batch_end_to_end() {
    let mut input = NamedTempFile::new().unwrap();
    input
        .write_all(
            b"age,sex,weight_kg,height_cm,activity_level,goal,adjustment_percent\n\
              30,Male,80,180,Sedentary,Lose,\n\
              25,Female,60,165,ModeratelyActive,Gain,\n\
              200,Male,80,180,Sedentary,Lose,\n",
        )
        .unwrap();
    let output = NamedTempFile::new().unwrap();

    let summary = run_batch(input.path(), output.path()).unwrap();
    assert_eq!(summary.planned, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.rows_written, 10);

    let content = fs::read_to_string(output.path()).unwrap();
    // header + 10 rows
    assert_eq!(content.lines().count(), 11);
    assert!(content.contains(",Late Snack,"));
}

#[test]
fn test_batch_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_profiles.csv");
    let output = dir.path().join("plans.csv");

    let result = run_batch(&missing, &output);
    assert!(matches!(result, Err(PlanError::Csv(_))), "got {:?}", result);
    assert!(!output.exists());
}
