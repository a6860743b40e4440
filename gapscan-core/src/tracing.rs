//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Reads `GAPSCAN_LOG` (falling back to `RUST_LOG`, then to `info`)
/// for the filter directive. Safe to call more than once; subsequent
/// calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("GAPSCAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
