//! Diagnostic logging setup for the command-line tool
//!
//! The library only emits `tracing` events. The binary installs a
//! formatting subscriber writing to stderr, so logs never mix with the
//! report printed on stdout.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV_VAR: &str = "ALGOVIZ_LOG";

/// Level selected by the number of `-v` flags
///
/// Quiet runs only report errors; each `-v` raises the level by one, from
/// warnings up to per-step traces.
pub const fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter built from `ALGOVIZ_LOG`, falling back to the flag level
pub fn filter_for(verbosity: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(level_for(verbosity, quiet).as_str().to_ascii_lowercase())
    })
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed, which happens
/// when tests initialise logging more than once.
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
