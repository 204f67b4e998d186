use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter applied when `RUST_LOG` is unset; stdout stays reserved for the
/// confirmation line.
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| err.to_string())
}
