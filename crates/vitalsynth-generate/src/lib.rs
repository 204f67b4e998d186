//! Synthetic blood-pressure dataset generation for vitalsynth.
//!
//! Draws independent records from fixed distributions, derives systolic
//! blood pressure through a non-linear formula and writes the result as CSV.

pub mod engine;
pub mod errors;
pub mod features;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, generate};
pub use errors::GenerationError;
pub use model::{DEFAULT_OUTPUT, DEFAULT_ROWS, GenerateOptions, Record, validate_row_count};
pub use output::csv::{read_records_csv, write_records_csv};
