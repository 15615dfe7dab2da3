//! ADS admin panel client
//!
//! Client side of the ADS event management admin panel: loads event detail
//! pages with their user panels, publishes and revokes events, and renders
//! the server's Handlebars templates into an in-memory page model.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdminError, Result};

// Re-export main components for easy access
pub use handlers::{DetailAggregator, PublishController};
pub use services::ServiceFactory;
pub use state::{AdminPage, CreateEventForm};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
