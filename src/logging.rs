//! Logging initialization for the `mgrid` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the `MGRID_LOG`
//! environment variable. Falls back to the `[log] level` from the config file
//! when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Level from config (warn by default)
//! mgrid show
//!
//! # Debug level
//! MGRID_LOG=debug mgrid span main --axis row
//!
//! # Module-specific filtering
//! MGRID_LOG=move_grid::layout=trace,warn mgrid reset
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "MGRID_LOG";

/// Initialize the tracing subscriber.
///
/// Output is written to stderr so it never mixes with grid output on stdout.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(level: LogLevel) {
    fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter from `MGRID_LOG`, or from `level` when the variable is unusable.
fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}
