use std::path::Path;

use clap::Parser;
use log::{debug, info};

use nutri_plan_rs::batch::{run_batch, save_plan_json};
use nutri_plan_rs::cli::{Cli, Command, OutputFormat, ProfileArgs};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::interface::{
    ProfileDraft, collect_profile, display_catalog, display_plan, display_plan_json,
};
use nutri_plan_rs::models::Goal;
use nutri_plan_rs::planner::{MealSlot, generate_plan};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { profile, output } => cmd_plan(profile, output.as_deref(), cli.format),
        Command::Catalog { meal, goal } => cmd_catalog(meal.as_deref(), goal),
        Command::Batch { input, output } => cmd_batch(&input, &output),
    }
}

/// Compute and show a plan for one profile.
fn cmd_plan(args: ProfileArgs, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    let draft = ProfileDraft {
        age: args.age,
        sex: args.sex,
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        activity_level: args.activity_level,
        goal: args.goal,
        adjustment_percent: args.adjustment_percent,
    };

    let profile = collect_profile(draft)?;
    debug!("profile: {:?}", profile);

    let plan = generate_plan(&profile);

    match format {
        OutputFormat::Table => display_plan(&plan),
        OutputFormat::Json => display_plan_json(&plan)?,
    }

    if let Some(path) = output {
        save_plan_json(path, &plan)?;
        info!("plan written to {}", path.display());
        if format == OutputFormat::Table {
            println!("Plan saved to {}", path.display());
        }
    }

    Ok(())
}

/// List catalog entries, optionally narrowed to one meal and/or goal.
fn cmd_catalog(meal: Option<&str>, goal: Option<Goal>) -> Result<()> {
    let meals = match meal {
        None => MealSlot::ALL.to_vec(),
        Some(name) => match MealSlot::from_name(name) {
            Some(slot) => vec![slot],
            None => {
                let suggestions: Vec<&str> =
                    MealSlot::suggest(name).iter().map(|s| s.label()).collect();
                let hint = if suggestions.is_empty() {
                    format!(
                        "expected one of: {}",
                        MealSlot::ALL
                            .iter()
                            .map(|s| s.label())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                } else {
                    format!("did you mean '{}'?", suggestions.join("' or '"))
                };
                return Err(PlanError::UnknownMeal(format!("'{}' ({})", name, hint)));
            }
        },
    };

    let goals = match goal {
        Some(goal) => vec![goal],
        None => Goal::ALL.to_vec(),
    };

    display_catalog(&meals, &goals);
    Ok(())
}

/// Plan every profile in a CSV file.
fn cmd_batch(input: &Path, output: &Path) -> Result<()> {
    let summary = run_batch(input, output)?;

    println!(
        "Planned {} profiles ({} skipped), wrote {} rows to {}",
        summary.planned,
        summary.skipped,
        summary.rows_written,
        output.display()
    );
    Ok(())
}
