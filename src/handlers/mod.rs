//! Admin panel handlers module
//!
//! This module contains the operations the admin panel performs:
//! - The event detail page with its per-category user panels
//! - The creation dialog, publishing, revoking and table rendering

pub mod details;
pub mod publish;

// Re-export commonly used handler types
pub use details::{DetailAggregator, DetailReport, PanelOutcome};
pub use publish::PublishController;
