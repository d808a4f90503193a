use tracing_subscriber::prelude::*;

/// Installs the stdout subscriber. `RUST_LOG` overrides the default filter.
pub fn setup_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,carousel=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}
