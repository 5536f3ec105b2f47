//! Structured Logger
//!
//! Wraps `tracing` with a console layer and a daily-rolling JSON file layer.
//! `RUST_LOG` takes precedence over the configured level.

use albumkit_config::{LoggingConfig, defaults::{DEFAULT_LOG_DIR, DEFAULT_LOG_LEVEL}};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Returns false if one was already installed.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // NDJSON to `<log_dir>/albumkit.log.YYYY-MM-DD`
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "albumkit.log");

    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_ansi(false);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
}

pub fn init_from_config(config: Option<&LoggingConfig>) -> bool {
    let level = config.and_then(|c| c.level.as_deref()).unwrap_or(DEFAULT_LOG_LEVEL);
    let dir = config.and_then(|c| c.dir.as_deref()).unwrap_or(DEFAULT_LOG_DIR);
    init_logger(dir, level)
}
