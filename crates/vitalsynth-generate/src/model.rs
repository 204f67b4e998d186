use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::GenerationError;
use crate::features::{AGE, BMI, EXERCISE_MINUTES, SODIUM_INTAKE_G, STRESS_SCORE};

/// Number of records generated when no count is given.
pub const DEFAULT_ROWS: usize = 50;
/// Destination file used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "medical_dataset.csv";

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of records to generate.
    pub rows: usize,
    /// CSV file to create or overwrite.
    pub output: PathBuf,
    /// Fixed seed for the random source. `None` draws the seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

/// One synthetic patient row. Field names match the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Record {
    pub age: u32,
    pub bmi: f64,
    pub sodium_intake_g: f64,
    pub exercise_minutes_per_week: u32,
    pub stress_score: f64,
    pub systolic_blood_pressure: f64,
}

impl Record {
    /// True when every clamped field sits inside its range.
    ///
    /// `systolic_blood_pressure` has no range and is not checked.
    pub fn is_within_ranges(&self) -> bool {
        AGE.contains(&self.age)
            && BMI.contains(self.bmi)
            && SODIUM_INTAKE_G.contains(self.sodium_intake_g)
            && EXERCISE_MINUTES.contains(f64::from(self.exercise_minutes_per_week))
            && STRESS_SCORE.contains(&self.stress_score)
    }
}

/// A CSV column with its fixed decimal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Digits after the decimal point; `None` for integer columns.
    pub scale: Option<usize>,
}

impl Column {
    const fn integer(name: &'static str) -> Self {
        Self { name, scale: None }
    }

    const fn decimal(name: &'static str, scale: usize) -> Self {
        Self {
            name,
            scale: Some(scale),
        }
    }
}

/// Output columns in file order.
pub const COLUMNS: [Column; 6] = [
    Column::integer("age"),
    Column::decimal("bmi", 1),
    Column::decimal("sodium_intake_g", 2),
    Column::integer("exercise_minutes_per_week"),
    Column::decimal("stress_score", 1),
    Column::decimal("systolic_blood_pressure", 1),
];

/// Convert a caller-supplied row count, rejecting negative values.
pub fn validate_row_count(rows: i64) -> Result<usize, GenerationError> {
    usize::try_from(rows).map_err(|_| GenerationError::InvalidRowCount(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_row_count_is_rejected() {
        assert!(matches!(
            validate_row_count(-1),
            Err(GenerationError::InvalidRowCount(-1))
        ));
        assert_eq!(validate_row_count(0).ok(), Some(0));
        assert_eq!(validate_row_count(50).ok(), Some(50));
    }

    #[test]
    fn range_check_ignores_blood_pressure() {
        let record = Record {
            age: 25,
            bmi: 40.0,
            sodium_intake_g: 1.5,
            exercise_minutes_per_week: 300,
            stress_score: 10.0,
            systolic_blood_pressure: 250.3,
        };
        assert!(record.is_within_ranges());

        let out_of_range = Record { age: 81, ..record };
        assert!(!out_of_range.is_within_ranges());
    }

    #[test]
    fn columns_follow_file_order() {
        let names: Vec<&str> = COLUMNS.iter().map(|col| col.name).collect();
        assert_eq!(
            names.join(","),
            "age,bmi,sodium_intake_g,exercise_minutes_per_week,stress_score,systolic_blood_pressure"
        );
    }
}
