use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Accepted input ranges, inclusive on both ends.
pub const AGE_RANGE: (u32, u32) = (10, 120);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
pub const ADJUSTMENT_PERCENT_RANGE: (f64, f64) = (0.0, 50.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Sex {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Activity levels, ordered from least to most active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum ActivityLevel {
    /// Little or no exercise.
    #[serde(alias = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week.
    #[serde(alias = "lightly_active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week.
    #[serde(alias = "moderately_active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week.
    #[serde(alias = "very_active")]
    VeryActive,
    /// Very hard exercise or a physical job.
    #[serde(alias = "extra_active")]
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Goal {
    #[default]
    #[serde(alias = "lose")]
    Lose,
    #[serde(alias = "maintain")]
    Maintain,
    #[serde(alias = "gain")]
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Lose",
            Goal::Maintain => "Maintain",
            Goal::Gain => "Gain",
        }
    }
}

/// A person's biometric profile, the sole input of the planner.
///
/// Construct through [`Profile::new`] so the ranges are checked before the
/// engine sees the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct Profile {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub adjustment_percent: Option<f64>,
}

impl Profile {
    pub fn new(
        age: u32,
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
        goal: Goal,
        adjustment_percent: Option<f64>,
    ) -> Result<Self> {
        let profile = Self {
            age,
            sex,
            weight_kg,
            height_cm,
            activity_level,
            goal,
            adjustment_percent,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&self.age) {
            return Err(out_of_range(
                "age",
                self.age as f64,
                AGE_RANGE.0 as f64,
                AGE_RANGE.1 as f64,
            ));
        }
        if !(WEIGHT_KG_RANGE.0..=WEIGHT_KG_RANGE.1).contains(&self.weight_kg) {
            return Err(out_of_range(
                "weight_kg",
                self.weight_kg,
                WEIGHT_KG_RANGE.0,
                WEIGHT_KG_RANGE.1,
            ));
        }
        if !(HEIGHT_CM_RANGE.0..=HEIGHT_CM_RANGE.1).contains(&self.height_cm) {
            return Err(out_of_range(
                "height_cm",
                self.height_cm,
                HEIGHT_CM_RANGE.0,
                HEIGHT_CM_RANGE.1,
            ));
        }
        if let Some(pct) = self.adjustment_percent {
            if !(ADJUSTMENT_PERCENT_RANGE.0..=ADJUSTMENT_PERCENT_RANGE.1).contains(&pct) {
                return Err(out_of_range(
                    "adjustment_percent",
                    pct,
                    ADJUSTMENT_PERCENT_RANGE.0,
                    ADJUSTMENT_PERCENT_RANGE.1,
                ));
            }
        }
        Ok(())
    }
}

fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> PlanError {
    PlanError::InvalidProfile(format!(
        "{} must be between {} and {} (got {})",
        field, min, max, value
    ))
}

/// Unvalidated profile input, as read from CSV rows or JSON.
///
/// Fields mirror [`Profile`] and accept both camelCase and snake_case names;
/// the goal defaults to `Lose` and an empty adjustment cell means "not provided".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub age: u32,
    pub sex: Sex,
    #[serde(alias = "weight_kg")]
    pub weight_kg: f64,
    #[serde(alias = "height_cm")]
    pub height_cm: f64,
    #[serde(alias = "activity_level")]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default, alias = "adjustment_percent")]
    pub adjustment_percent: Option<f64>,
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = PlanError;

    fn try_from(record: ProfileRecord) -> Result<Self> {
        Profile::new(
            record.age,
            record.sex,
            record.weight_kg,
            record.height_cm,
            record.activity_level,
            record.goal.unwrap_or_default(),
            record.adjustment_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile::new(
            30,
            Sex::Male,
            80.0,
            180.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_profile() {
        let profile = sample_profile();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.goal, Goal::Lose);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let low = Profile::new(
            10,
            Sex::Female,
            30.0,
            100.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
            Some(0.0),
        );
        assert!(low.is_ok());

        let high = Profile::new(
            120,
            Sex::Male,
            300.0,
            250.0,
            ActivityLevel::ExtraActive,
            Goal::Gain,
            Some(50.0),
        );
        assert!(high.is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut profile = sample_profile();
        profile.age = 9;
        assert!(matches!(profile.validate(), Err(PlanError::InvalidProfile(_))));

        let mut profile = sample_profile();
        profile.weight_kg = 300.5;
        assert!(profile.validate().is_err());

        let mut profile = sample_profile();
        profile.height_cm = 99.9;
        assert!(profile.validate().is_err());

        let mut profile = sample_profile();
        profile.adjustment_percent = Some(51.0);
        assert!(profile.validate().is_err());

        let mut profile = sample_profile();
        profile.weight_kg = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_error_names_field() {
        let mut profile = sample_profile();
        profile.height_cm = 260.0;
        let err = profile.validate().unwrap_err().to_string();
        assert!(err.contains("height_cm"));
        assert!(err.contains("250"));
    }

    #[test]
    fn test_record_defaults_goal_to_lose() {
        let record = ProfileRecord {
            age: 40,
            sex: Sex::Female,
            weight_kg: 65.0,
            height_cm: 168.0,
            activity_level: ActivityLevel::LightlyActive,
            goal: None,
            adjustment_percent: None,
        };
        let profile = Profile::try_from(record).unwrap();
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.adjustment_percent, None);
    }

    #[test]
    fn test_activity_levels_are_ordered() {
        assert!(ActivityLevel::Sedentary < ActivityLevel::LightlyActive);
        assert!(ActivityLevel::VeryActive < ActivityLevel::ExtraActive);
        let mut sorted = ActivityLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, ActivityLevel::ALL);
    }

    #[test]
    fn test_profile_json_defaults() {
        let json = r#"{
            "age": 30,
            "sex": "Male",
            "weightKg": 80,
            "heightCm": 180,
            "activityLevel": "Sedentary"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.adjustment_percent, None);
    }

    #[test]
    fn test_profile_json_is_validated() {
        let json = r#"{
            "age": 30,
            "sex": "Male",
            "weightKg": 20,
            "heightCm": 180,
            "activityLevel": "Sedentary"
        }"#;
        let err = serde_json::from_str::<Profile>(json).unwrap_err();
        assert!(err.to_string().contains("weight_kg"));
    }
}
