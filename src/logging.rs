//! Logging setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file. Without
//! a log path no subscriber is installed and `tracing` macros are no-ops.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns false when no path was given. A subscriber that is already
/// installed is left in place.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(true)
}
