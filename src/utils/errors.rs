//! Error handling for the ADS admin client
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for admin panel operations
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ADS API error: {0}")]
    Api(#[from] ApiError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Non-success reply from the ADS API
#[derive(Error, Debug, Clone)]
#[error("HTTP {status}: {body}")]
pub struct ApiError {
    pub status: StatusCode,
    /// Raw response text, shown to the operator as-is
    pub body: String,
    /// Value of the `x-ads-troubleshooting` header, if the server sent one
    pub troubleshooting: Option<String>,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

/// Template specific errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template compilation failed: {0}")]
    Compilation(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AdminError::Http(_) => true,
            AdminError::Api(e) => e.status.is_server_error(),
            AdminError::Template(_) => false,
            AdminError::Config(_) => false,
            AdminError::EventNotFound { .. } => false,
            AdminError::Timeout(_) => true,
            AdminError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdminError::Config(_) => ErrorSeverity::Critical,
            AdminError::Template(_) => ErrorSeverity::Critical,
            AdminError::Api(e) if e.status.is_client_error() => ErrorSeverity::Warning,
            AdminError::EventNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text the operator sees in an alert for this error.
    ///
    /// API failures surface the raw server reply, everything else its
    /// display form.
    pub fn operator_message(&self) -> String {
        match self {
            AdminError::Api(e) => e.body.clone(),
            other => other.to_string(),
        }
    }

    /// The underlying API error, if the server answered with a failure status
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            AdminError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
