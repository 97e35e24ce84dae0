//! Logging initialisation.
//!
//! Output goes to stderr; stdout carries only the run result.
//! Priority: RUST_LOG env var > `--debug` flag > default "info".

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!(version = crate::ENGINE_VERSION, "Logging initialised");
}
