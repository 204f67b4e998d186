mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use thiserror::Error;
use vitalsynth_generate::{
    DEFAULT_OUTPUT, DEFAULT_ROWS, GenerateOptions, GenerationEngine, GenerationError,
    validate_row_count, write_records_csv,
};

use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Generate a synthetic medical dataset relating blood pressure to age and other factors.
#[derive(Parser, Debug)]
#[command(name = "vitalsynth", version, about)]
struct Cli {
    /// Number of rows to generate.
    #[arg(short, long, default_value_t = DEFAULT_ROWS as i64, allow_negative_numbers = true)]
    rows: i64,
    /// Path to the CSV file to create.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Cli {
    fn into_options(self) -> Result<GenerateOptions, CliError> {
        Ok(GenerateOptions {
            rows: validate_row_count(self.rows)?,
            output: self.output,
            seed: None,
        })
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging().map_err(CliError::Logging)?;

    let options = cli.into_options()?;
    run(&options)?;

    println!(
        "Dataset with {} rows written to {}",
        options.rows,
        options.output.display()
    );
    Ok(())
}

fn run(options: &GenerateOptions) -> Result<(), CliError> {
    let timer = Instant::now();
    tracing::info!(rows = options.rows, output = %options.output.display(), "run started");

    let mut engine = GenerationEngine::from_options(options)?;
    let records = engine.generate(options.rows);
    let bytes_written = write_records_csv(&options.output, &records)?;

    tracing::info!(
        status = "success",
        bytes_written,
        duration_ms = timer.elapsed().as_millis() as u64,
        "run finished"
    );
    Ok(())
}
