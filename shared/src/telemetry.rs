//! Tracing subscriber setup shared by every binary.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Install the global subscriber. Log level comes from `RUST_LOG`.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    tracing::info!(service = %config.service_name, "Tracing initialised");
}
