//! Idea model

use serde::{Deserialize, Serialize};
use super::UserIds;

/// A published idea listed in the admin ideas table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub liked_users: UserIds,
    #[serde(default)]
    pub followers: UserIds,
}
