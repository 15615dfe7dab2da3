//! State management module
//!
//! This module holds the page model controllers render into and the
//! creation form state they read from.

pub mod form;
pub mod page;

// Re-export commonly used state components
pub use form::{CreateEventForm, ImageFile, UploadSlot, UploadTarget};
pub use page::{AdminPage, TableRow, event_row_id};
