use std::str::FromStr;

use dialoguer::{Input, Select};

use crate::error::{PlanError, Result};
use crate::models::profile::{
    ADJUSTMENT_PERCENT_RANGE, AGE_RANGE, HEIGHT_CM_RANGE, WEIGHT_KG_RANGE,
};
use crate::models::{ActivityLevel, Goal, Profile, Sex};

/// Values already supplied on the command line; `None` fields are prompted for.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub adjustment_percent: Option<f64>,
}

impl ProfileDraft {
    /// True when every required field is present.
    pub fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.sex.is_some()
            && self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.activity_level.is_some()
    }
}

fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_number(
        &format!("Age in years ({}-{})", AGE_RANGE.0, AGE_RANGE.1),
        "30",
    )
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    prompt_number(
        &format!("Weight in kg ({}-{})", WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1),
        "70",
    )
}

/// Prompt for height in centimetres.
pub fn prompt_height() -> Result<f64> {
    prompt_number(
        &format!("Height in cm ({}-{})", HEIGHT_CM_RANGE.0, HEIGHT_CM_RANGE.1),
        "170",
    )
}

pub fn prompt_sex() -> Result<Sex> {
    let options = vec![Sex::Male.label(), Sex::Female.label()];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 1 { Sex::Female } else { Sex::Male })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or(ActivityLevel::Sedentary))
}

pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Goal::ALL.get(selection).copied().unwrap_or_default())
}

/// Prompt for an optional adjustment percent; empty input means "use the goal default".
pub fn prompt_adjustment_percent() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Calorie adjustment % ({}-{}, Enter for goal default)",
            ADJUSTMENT_PERCENT_RANGE.0, ADJUSTMENT_PERCENT_RANGE.1
        ))
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Fill in missing profile fields interactively, then validate.
///
/// Goal and adjustment are only asked for when the required fields were
/// missing too; a complete draft never prompts.
pub fn collect_profile(draft: ProfileDraft) -> Result<Profile> {
    let interactive = !draft.is_complete();

    let age = match draft.age {
        Some(age) => age,
        None => prompt_age()?,
    };
    let sex = match draft.sex {
        Some(sex) => sex,
        None => prompt_sex()?,
    };
    let weight_kg = match draft.weight_kg {
        Some(weight) => weight,
        None => prompt_weight()?,
    };
    let height_cm = match draft.height_cm {
        Some(height) => height,
        None => prompt_height()?,
    };
    let activity_level = match draft.activity_level {
        Some(level) => level,
        None => prompt_activity_level()?,
    };
    let goal = match draft.goal {
        Some(goal) => goal,
        None if interactive => prompt_goal()?,
        None => Goal::default(),
    };
    let adjustment_percent = match draft.adjustment_percent {
        Some(pct) => Some(pct),
        None if interactive => prompt_adjustment_percent()?,
        None => None,
    };

    Profile::new(
        age,
        sex,
        weight_kg,
        height_cm,
        activity_level,
        goal,
        adjustment_percent,
    )
}
