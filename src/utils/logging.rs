//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the admin client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{AdminError, Result};

/// Initialize logging based on configuration.
///
/// Console output goes to stderr so rendered markup on stdout stays clean.
/// The returned guard must be held for as long as file logging should flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AdminError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "ads-admin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let plain_layer = (!config.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AdminError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log operator actions against the ADS server
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    info!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log an alert shown to the operator
pub fn log_operator_alert(message: &str) {
    warn!(message = message, "Operator alert raised");
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log the outcome of one category's profile fan-out
pub fn log_aggregation(category: &str, requested: usize, received: usize, rendered: bool) {
    if rendered {
        debug!(
            category = category,
            requested = requested,
            received = received,
            "Category panel rendered"
        );
    } else {
        warn!(
            category = category,
            requested = requested,
            received = received,
            "Category panel dropped"
        );
    }
}
