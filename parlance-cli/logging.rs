//! Diagnostic logging for the command-line front end.
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber. Diagnostics always go to stderr so they never mix with
//! presentation output on stdout.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "PARLANCE_LOG";

/// Default filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter: [`LOG_ENV`] when set and valid, the `-v` level otherwise.
pub fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

/// Installs the global stderr subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbose: u8) {
    let installed = fmt()
        .with_env_filter(filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
