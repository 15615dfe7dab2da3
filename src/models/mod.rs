//! Data models module
//!
//! This module contains the request and response shapes exchanged with the
//! ADS server. None of them are owned or persisted by this crate.

pub mod category;
pub mod event;
pub mod idea;
pub mod user;

// Re-export commonly used models
pub use category::Category;
pub use event::{Event, CreateEventRequest};
pub use idea::Idea;
pub use user::{UserIds, UserProfile};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar used as an identifier in its canonical string form
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept identifiers sent either as JSON strings or numbers
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid identifier: {}", value)))
}
