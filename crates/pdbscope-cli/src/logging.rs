//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter(verbose: bool, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("info"))
        }
    })
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
pub fn init(verbose: bool, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, configured))
        .with_writer(std::io::stderr)
        .try_init();
}
