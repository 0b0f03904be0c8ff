//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MASSPASS_LOG";

/// Install the global subscriber. `MASSPASS_LOG` overrides the level.
pub fn init(quiet: bool) {
    let default = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
