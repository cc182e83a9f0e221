//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the MiBiciBot application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{MiBiciError, Result};

/// Initialize logging based on configuration.
///
/// When a log file is configured the returned guard must be kept alive for
/// the lifetime of the process, otherwise buffered lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| MiBiciError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let guard = match config.file_path.as_deref().filter(|p| !p.is_empty()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "mibici-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| MiBiciError::Config(format!("Failed to install logger: {}", e)))?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| MiBiciError::Config(format!("Failed to install logger: {}", e)))?;
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a conversation state change
pub fn log_state_transition(user_id: i64, from: &str, to: &str) {
    debug!(
        user_id = user_id,
        from = from,
        to = to,
        "Conversation state changed"
    );
}

/// Log a failed call to the stations API
pub fn log_api_failure(operation: &str, http_status: Option<u16>, error_code: &str) {
    warn!(
        operation = operation,
        http_status = http_status,
        error_code = error_code,
        "Stations API call failed"
    );
}
