use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{LogFormat, LoggingConfig};

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over the configured directive. Calling this
/// more than once in a process is an error from the subscriber registry.
pub fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.env_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
