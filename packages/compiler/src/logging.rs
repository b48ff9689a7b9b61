//! Logging setup
//!
//! Library code only emits `tracing` events; binaries and tests call
//! `init_logging` once to see them.

use crate::config::CompilerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to `default_directive`. Returns `false` if a subscriber was already set.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

/// `init_logging` with the configured `logLevel` directive.
pub fn init_from_config(config: &CompilerConfig) -> bool {
    init_logging(&config.log_level)
}
