//! User relationship categories shown on the event detail page

use serde::{Deserialize, Serialize};
use super::{Event, UserIds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Applying,
    Registered,
    Following,
}

impl Category {
    /// Render order on the detail page
    pub const ALL: [Category; 3] = [Category::Applying, Category::Registered, Category::Following];

    /// Panel title passed to the users template
    pub fn label(&self) -> &'static str {
        match self {
            Category::Applying => "Applying Users",
            Category::Registered => "Registered Users",
            Category::Following => "Following Users",
        }
    }

    /// Event field holding this category's user ids
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Applying => "applyingUsers",
            Category::Registered => "registerUsers",
            Category::Following => "followers",
        }
    }

    /// The event's user ids belonging to this category
    pub fn user_ids(&self, event: &Event) -> UserIds {
        event.user_ids(self.field_name())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
