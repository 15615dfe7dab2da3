//! In-memory model of the admin page
//!
//! Controllers render into this instead of a browser document: the detail
//! view's main panel and aside, the events and ideas tables, operator alerts
//! and windows opened for the operator.

use crate::utils::logging::log_operator_alert;

/// A rendered table row together with the element id it is addressed by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub element_id: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct AdminPage {
    /// Event detail panel
    pub main: Option<String>,
    /// Category panels, in the order they were appended
    pub aside: Vec<String>,
    pub events_table: Vec<TableRow>,
    pub ideas_table: Vec<String>,
    pub alerts: Vec<String>,
    pub opened_windows: Vec<String>,
    pub create_dialog_open: bool,
}

/// Element id of the events table row for an event
pub fn event_row_id(event_id: &str) -> String {
    format!("event-row-{}", event_id)
}

impl AdminPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a blocking message to the operator
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        log_operator_alert(&message);
        self.alerts.push(message);
    }

    /// Drain alerts raised since the last call
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn set_main(&mut self, html: String) {
        self.main = Some(html);
    }

    pub fn append_aside(&mut self, html: String) {
        self.aside.push(html);
    }

    pub fn append_event_row(&mut self, event_id: &str, html: String) {
        self.events_table.push(TableRow {
            element_id: event_row_id(event_id),
            html,
        });
    }

    /// Remove every row carrying the given element id; true if one was removed
    pub fn remove_element(&mut self, element_id: &str) -> bool {
        let before = self.events_table.len();
        self.events_table.retain(|row| row.element_id != element_id);
        before != self.events_table.len()
    }

    pub fn has_element(&self, element_id: &str) -> bool {
        self.events_table.iter().any(|row| row.element_id == element_id)
    }

    pub fn append_idea_row(&mut self, html: String) {
        self.ideas_table.push(html);
    }

    pub fn open_window(&mut self, url: impl Into<String>) {
        self.opened_windows.push(url.into());
    }
}
