use tracing_subscriber::{EnvFilter, fmt};

use crate::config::app_config::AppConfig;

/// Installs the global subscriber. Falls back to `info` when the filter does not parse.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
