//! Event models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use super::UserIds;

/// An event as returned by the ADS server.
///
/// Only `id` is required to have a known shape. Every other field is kept as
/// the server sent it and handed to templates untouched; the accessors below
/// read the few fields this crate acts on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    /// Raw value of a field other than `id`
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value when the server sent it as a string
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    /// Stored name of the event thumbnail
    pub fn thumbnail(&self) -> Option<&str> {
        self.text("thumbnail")
    }

    /// User ids held in `name`.
    ///
    /// A missing or malformed collection reads as empty.
    pub fn user_ids(&self, name: &str) -> UserIds {
        match self.field(name) {
            None | Some(Value::Null) => UserIds::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                warn!(event_id = %self.id, field = name, error = %e, "Ignoring malformed user id collection");
                UserIds::default()
            }),
        }
    }

    pub fn applying_user_count(&self) -> Option<u64> {
        self.field(APPLYING_USER_COUNT).and_then(Value::as_u64)
    }

    pub fn set_applying_user_count(&mut self, count: u64) {
        self.fields.insert(APPLYING_USER_COUNT.to_string(), Value::from(count));
    }
}

const APPLYING_USER_COUNT: &str = "applyingUserCount";

/// Body of `POST /events`.
///
/// Every field is taken verbatim from the creation form; the server is the
/// only validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub category: String,
    pub expiration: String,
    pub start_time: String,
    pub end_time: String,
    pub seats: String,
    pub location: String,
    pub presenter: String,
    pub presenter_logo: String,
    pub presenter_email: String,
    pub presenter_title: String,
    pub register_policy: String,
    pub description: String,
    pub thumbnail: String,
}
