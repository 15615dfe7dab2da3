//! Event creation form state
//!
//! Holds everything the creation dialog collects. The form is passed around
//! explicitly so upload results and field values flow into the publish step
//! without any ambient storage.

use serde::{Deserialize, Serialize};
use crate::models::CreateEventRequest;
use crate::utils::helpers::compose_timestamp;

/// Hint shown next to an upload control before an image is chosen
pub const UPLOAD_TIP: &str = "Choose an image..";

pub const DEFAULT_START: &str = "08:30";
pub const DEFAULT_END: &str = "09:30";

/// An image picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// One upload control: the chosen file and the server path of the last upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSlot {
    pub file: Option<ImageFile>,
    /// Path returned by `POST /image`, empty until an upload succeeds
    pub path: String,
    pub visible: bool,
    pub tip: String,
}

impl UploadSlot {
    pub fn select(&mut self, file: ImageFile) {
        self.tip = file.file_name.clone();
        self.file = Some(file);
    }

    pub fn store_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.visible = true;
    }

    fn reset(&mut self) {
        self.file = None;
        self.path.clear();
        self.visible = false;
        self.tip = UPLOAD_TIP.to_string();
    }
}

impl Default for UploadSlot {
    fn default() -> Self {
        Self {
            file: None,
            path: String::new(),
            visible: false,
            tip: UPLOAD_TIP.to_string(),
        }
    }
}

/// Which upload control an image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Thumbnail,
    PresenterLogo,
}

impl UploadTarget {
    pub fn name(&self) -> &'static str {
        match self {
            UploadTarget::Thumbnail => "thumbnail",
            UploadTarget::PresenterLogo => "presenter_logo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEventForm {
    pub title: String,
    pub category: String,
    /// Registration deadline
    pub due: String,
    /// Day of the event; joined with `start`/`end`
    pub schedule: String,
    pub start: String,
    pub end: String,
    /// Capacity
    pub max: String,
    pub location: String,
    pub presenter: String,
    pub presenter_email: String,
    pub presenter_title: String,
    pub policy: String,
    pub description: String,
    #[serde(skip)]
    pub thumbnail: UploadSlot,
    #[serde(skip)]
    pub presenter_logo: UploadSlot,
}

impl Default for CreateEventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            due: String::new(),
            schedule: String::new(),
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
            max: String::new(),
            location: String::new(),
            presenter: String::new(),
            presenter_email: String::new(),
            presenter_title: String::new(),
            policy: String::new(),
            description: String::new(),
            thumbnail: UploadSlot::default(),
            presenter_logo: UploadSlot::default(),
        }
    }
}

impl CreateEventForm {
    /// Put the form back into the state the creation dialog opens with.
    ///
    /// Category, schedule day and registration policy are selections, not
    /// free-text inputs, and keep their current value.
    pub fn reset(&mut self) {
        self.title.clear();
        self.due.clear();
        self.start = DEFAULT_START.to_string();
        self.end = DEFAULT_END.to_string();
        self.max.clear();
        self.location.clear();
        self.presenter.clear();
        self.presenter_email.clear();
        self.presenter_title.clear();
        self.description.clear();
        self.thumbnail.reset();
        self.presenter_logo.reset();
    }

    pub fn slot(&self, target: UploadTarget) -> &UploadSlot {
        match target {
            UploadTarget::Thumbnail => &self.thumbnail,
            UploadTarget::PresenterLogo => &self.presenter_logo,
        }
    }

    pub fn slot_mut(&mut self, target: UploadTarget) -> &mut UploadSlot {
        match target {
            UploadTarget::Thumbnail => &mut self.thumbnail,
            UploadTarget::PresenterLogo => &mut self.presenter_logo,
        }
    }

    /// Build the `POST /events` body from the current field values
    pub fn to_create_request(&self) -> CreateEventRequest {
        CreateEventRequest {
            title: self.title.clone(),
            category: self.category.clone(),
            expiration: self.due.clone(),
            start_time: compose_timestamp(&self.schedule, &self.start),
            end_time: compose_timestamp(&self.schedule, &self.end),
            seats: self.max.clone(),
            location: self.location.clone(),
            presenter: self.presenter.clone(),
            presenter_logo: self.presenter_logo.path.trim().to_string(),
            presenter_email: self.presenter_email.clone(),
            presenter_title: self.presenter_title.clone(),
            register_policy: self.policy.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.path.trim().to_string(),
        }
    }
}
