//! Tracing setup shared by the binaries.
//!
//! Logs go to stderr; stdout is reserved for the JSON output.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
