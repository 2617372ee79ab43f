//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, Result};

/// Initialize the logging system.
///
/// Log lines go to stderr so that a token listing on stdout stays clean.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}
