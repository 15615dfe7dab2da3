//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub templates: TemplatesConfig,
    pub assets: AssetsConfig,
    pub aggregation: AggregationConfig,
    pub logging: LoggingConfig,
}

/// ADS server location
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL every API path is resolved against
    pub base_url: String,
    /// Host used when building public image URLs (`http://{host}/images/...`)
    pub public_host: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Template locations on the ADS server
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplatesConfig {
    pub event_details: String,
    pub event_users: String,
    pub event_create: String,
}

/// Static asset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Image shown when the thumbnail endpoint has no variant for an upload
    pub default_image: String,
    pub thumbnail_size: String,
}

/// What to do with a category panel when a profile fetch fails or times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Drop the whole panel
    FailPanel,
    /// Render the profiles that did arrive
    RenderPartial,
}

/// Profile fan-out configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Upper bound on the wait for one category's profiles
    pub profile_timeout_ms: u64,
    pub failure_policy: FailurePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `warn,ads_admin=debug`
    pub level: String,
    /// Directory for the rolling log file; stderr only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the given file (extension optional) and environment
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("ADS_ADMIN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            public_host: "localhost:8080".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "ADS-Admin/1.0".to_string(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            event_details: "/assets/templates/admin/event.details.tmpl.html".to_string(),
            event_users: "/assets/templates/admin/event.users.tmpl.html".to_string(),
            event_create: "/assets/templates/admin/event.create.tmpl.html".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            default_image: "/assets/images/default.png".to_string(),
            thumbnail_size: "300x200".to_string(),
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            profile_timeout_ms: 10_000,
            failure_policy: FailurePolicy::FailPanel,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
