//! Logging bootstrap

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place. Returns whether this call installed it.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}
