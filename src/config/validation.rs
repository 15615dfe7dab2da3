//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AdminError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_http_config(&settings.http)?;
    validate_templates_config(&settings.templates)?;
    validate_assets_config(&settings.assets)?;
    validate_aggregation_config(&settings.aggregation)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AdminError::Config(
            "Server base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if url.cannot_be_a_base() {
        return Err(AdminError::Config(
            format!("Server base URL cannot be used as a base: {}", config.base_url)
        ));
    }

    if config.public_host.is_empty() {
        return Err(AdminError::Config(
            "Public host is required".to_string()
        ));
    }

    Ok(())
}

/// Validate HTTP client configuration
fn validate_http_config(config: &super::HttpConfig) -> Result<()> {
    if config.timeout_seconds == 0 {
        return Err(AdminError::Config(
            "HTTP timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate template paths
fn validate_templates_config(config: &super::TemplatesConfig) -> Result<()> {
    for (name, path) in [
        ("event_details", &config.event_details),
        ("event_users", &config.event_users),
        ("event_create", &config.event_create),
    ] {
        if !path.starts_with('/') {
            return Err(AdminError::Config(
                format!("Template path {} must be absolute, got: {}", name, path)
            ));
        }
    }

    Ok(())
}

/// Validate asset configuration
fn validate_assets_config(config: &super::AssetsConfig) -> Result<()> {
    if config.default_image.is_empty() {
        return Err(AdminError::Config(
            "Default image is required".to_string()
        ));
    }

    let valid_size = config
        .thumbnail_size
        .split_once('x')
        .map(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok())
        .unwrap_or(false);
    if !valid_size {
        return Err(AdminError::Config(
            format!("Invalid thumbnail size: {}. Expected WIDTHxHEIGHT", config.thumbnail_size)
        ));
    }

    Ok(())
}

/// Validate aggregation configuration
fn validate_aggregation_config(config: &super::AggregationConfig) -> Result<()> {
    if config.profile_timeout_ms == 0 {
        return Err(AdminError::Config(
            "Profile timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AdminError::Config(
            "Log level is required".to_string()
        ));
    }

    // same parser init_logging uses, so per-target directives are accepted
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.level) {
        return Err(AdminError::Config(
            format!("Invalid log filter: {}: {}", config.level, e)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_thumbnail_size() {
        let mut settings = Settings::default();
        settings.assets.thumbnail_size = "300by200".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let mut settings = Settings::default();
        settings.server.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::UrlParse(_)));
    }

    #[test]
    fn test_rejects_zero_profile_timeout() {
        let mut settings = Settings::default();
        settings.aggregation.profile_timeout_ms = 0;
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_log_filter() {
        let mut settings = Settings::default();
        settings.logging.level = "ads_admin=verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn test_accepts_per_target_log_filter() {
        let mut settings = Settings::default();
        settings.logging.level = "warn,ads_admin=debug".to_string();
        assert!(validate_settings(&settings).is_ok());
    }
}
