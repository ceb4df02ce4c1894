//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise `--verbose` maps to
/// `debug` and the default is `warn`. Output goes to stderr so chart output
/// on stdout stays machine-readable.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
