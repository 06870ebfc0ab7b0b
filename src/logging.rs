//! Logging setup.
//!
//! Structured logging via `tracing`, written to stderr so that command
//! output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a logging filter directive.
pub const LOG_ENV_VAR: &str = "GITFS_LOG";

/// Initialize the global tracing subscriber.
///
/// `debug` selects the default filter level used when [`LOG_ENV_VAR`] is
/// not set. Repeated calls after the first are no-ops.
pub fn init(debug: bool) {
    let default_directive = if debug { "gitfs_rs=debug" } else { "gitfs_rs=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
