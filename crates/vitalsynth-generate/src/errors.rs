use thiserror::Error;

/// Errors emitted by the generation engine and the CSV writer.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid row count: {0} (must be zero or positive)")]
    InvalidRowCount(i64),
    #[error("invalid distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
