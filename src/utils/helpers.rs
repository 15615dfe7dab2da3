//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

/// Join a schedule date and a time of day into the timestamp form the ADS
/// server expects (`2024-05-01` + `08:30` -> `2024-05-01T08:30`).
///
/// No validation happens here; malformed input is left for the server to reject.
pub fn compose_timestamp(date: &str, time: &str) -> String {
    format!("{}T{}", date, time)
}

/// Percent-encode a value for use as a single URL path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escape text for inclusion in hand-built markup
pub fn escape_html(text: &str) -> String {
    handlebars::html_escape(text)
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
