use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::models::{Profile, ProfileRecord};

/// Valid profiles read from a CSV file, tagged with their record number.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub profiles: Vec<(usize, Profile)>,
    pub skipped: usize,
}

/// Load profiles from a CSV file with a header row.
///
/// Columns: `age,sex,weight_kg,height_cm,activity_level,goal,adjustment_percent`.
/// `goal` and `adjustment_percent` may be empty. Rows that fail to parse or
/// validate are skipped with a warning; record numbers start at 1.
pub fn read_profiles<P: AsRef<Path>>(path: P) -> Result<BatchInput> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut batch = BatchInput::default();
    for (index, row) in reader.deserialize::<ProfileRecord>().enumerate() {
        let record_number = index + 1;
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                warn!("record {}: {}", record_number, e);
                batch.skipped += 1;
                continue;
            }
        };

        match Profile::try_from(record) {
            Ok(profile) => batch.profiles.push((record_number, profile)),
            Err(e) => {
                warn!("record {}: {}", record_number, e);
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}
