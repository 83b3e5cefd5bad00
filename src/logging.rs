//! Diagnostic logging setup
//!
//! Log events go to stderr so stdout carries only the run report.
//! `NOTEMARK_LOG` takes an `EnvFilter` directive and overrides `--verbose`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{NotemarkError, Result};

pub const LOG_ENV: &str = "NOTEMARK_LOG";

/// Default filter level for the given verbosity
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "notemark=debug" } else { "warn" }
}

/// Initialize the logging system
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| NotemarkError::IoError {
            message: format!("Failed to initialize logging: {e}"),
        })
}
