mod reader;
mod writer;

pub use reader::{BatchInput, read_profiles};
pub use writer::{PlanRow, save_plan_json, write_plan_rows};

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::PlanResult;
use crate::planner::generate_plan;

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub planned: usize,
    pub skipped: usize,
    pub rows_written: usize,
}

/// Read profiles from `input`, plan each one and write meal rows to `output`.
pub fn run_batch<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<BatchSummary> {
    let batch = read_profiles(input)?;

    let plans: Vec<(usize, PlanResult)> = batch
        .profiles
        .iter()
        .map(|(line, profile)| (*line, generate_plan(profile)))
        .collect();

    let rows_written = write_plan_rows(output, &plans)?;

    let summary = BatchSummary {
        planned: plans.len(),
        skipped: batch.skipped,
        rows_written,
    };
    info!(
        "batch: planned {} profiles, skipped {}, wrote {} rows",
        summary.planned, summary.skipped, summary.rows_written
    );
    Ok(summary)
}
