use std::io;
use tracing::Level;
use tracing_subscriber::{filter, fmt, prelude::*, EnvFilter};

/// Installs the global subscriber used by the binaries.
///
/// `default_directive` applies when RUST_LOG is unset or unparsable. Everything at or above
/// WARN additionally goes to stderr, so diagnostics printed on stdout stay parseable.
pub fn start_pairfloat_tracing_subscriber(default_directive: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stdout_log = fmt::layer()
        .with_target(false)
        .with_filter(env_filter)
        .with_filter(filter::filter_fn(|metadata| *metadata.level() > Level::WARN));

    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter::LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(stderr_log)
        .init()
}
