use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::{ActivityLevel, Goal, Sex};

/// NutriPlan — daily calorie targets, macros and a scaled meal plan from a biometric profile.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for plans.
    #[arg(long, global = true, value_enum, env = "NUTRI_PLAN_FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Profile fields accepted on the command line. Missing required fields are prompted for.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Age in years (10-120).
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    /// Weight in kilograms (30-300).
    #[arg(long = "weight")]
    pub weight_kg: Option<f64>,

    /// Height in centimetres (100-250).
    #[arg(long = "height")]
    pub height_cm: Option<f64>,

    #[arg(long = "activity", value_enum)]
    pub activity_level: Option<ActivityLevel>,

    /// Goal; defaults to lose when the other fields are given.
    #[arg(long, value_enum)]
    pub goal: Option<Goal>,

    /// Calorie adjustment percent (0-50); goal default when omitted.
    #[arg(long = "adjust")]
    pub adjustment_percent: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a daily plan for one profile.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Also write the plan as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the food templates used to build meals.
    Catalog {
        /// Only show this meal (e.g. "Lunch", "Late Snack").
        #[arg(long)]
        meal: Option<String>,

        /// Only show this goal.
        #[arg(long, value_enum)]
        goal: Option<Goal>,
    },

    /// Plan every profile in a CSV file.
    Batch {
        /// Input CSV with profile rows.
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV with one row per profile and meal.
        #[arg(short, long, default_value = "plans.csv")]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_args() {
        let cli = Cli::try_parse_from([
            "nutri_plan",
            "plan",
            "--age",
            "30",
            "--sex",
            "male",
            "--weight",
            "80",
            "--height",
            "180",
            "--activity",
            "moderately-active",
            "--goal",
            "gain",
            "--adjust",
            "15",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Plan { profile, output }) => {
                assert_eq!(profile.age, Some(30));
                assert_eq!(profile.sex, Some(Sex::Male));
                assert_eq!(profile.activity_level, Some(ActivityLevel::ModeratelyActive));
                assert_eq!(profile.goal, Some(Goal::Gain));
                assert_eq!(profile.adjustment_percent, Some(15.0));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_and_format() {
        let cli =
            Cli::try_parse_from(["nutri_plan", "--format", "json", "catalog", "--meal", "Lunch"])
                .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Some(Command::Catalog { meal: Some(ref m), goal: None }) if m == "Lunch"
        ));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["nutri_plan"]).unwrap();
        assert!(cli.command.is_none());
    }
}
