//! Logging setup for the command line front end.
//!
//! Logs go to stderr so JSON written to stdout stays machine-readable.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise debug builds log at DEBUG and release
/// builds at INFO.
pub fn setup_logging() {
    let default_directive = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Logging already initialized");
        return;
    }

    tracing::debug!("Logging initialized");
}
