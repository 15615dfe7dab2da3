//! Event publishing and management
//!
//! Drives the creation dialog: image uploads, publishing the composed event,
//! resolving its display thumbnail and adding it to the events table. Also
//! revokes events and opens their admin detail pages.
//!
//! Every step is awaited before the next one starts, so an upload always
//! lands before a publish that reads its path, and a publish always
//! completes before its row is displayed.

use serde::Serialize;
use tracing::{debug, error, info};
use crate::config::Settings;
use crate::models::{Event, Idea};
use crate::services::api::AdsApiClient;
use crate::services::templates::{TemplateKind, TemplateService};
use crate::state::{event_row_id, AdminPage, CreateEventForm, UploadTarget};
use crate::utils::errors::Result;
use crate::utils::helpers::{escape_html, path_segment};
use crate::utils::logging::{log_admin_action, log_api_error};

/// Data handed to the events table row template
#[derive(Debug, Serialize)]
struct EventRow<'a> {
    event: &'a Event,
    img: &'a str,
}

#[derive(Clone, Debug)]
pub struct PublishController {
    api: AdsApiClient,
    templates: TemplateService,
    settings: Settings,
}

impl PublishController {
    pub fn new(api: AdsApiClient, templates: TemplateService, settings: Settings) -> Self {
        Self {
            api,
            templates,
            settings,
        }
    }

    /// Open the creation dialog with a freshly reset form
    pub fn open_create_dialog(&self, page: &mut AdminPage, form: &mut CreateEventForm) {
        self.reset_ui(form);
        page.create_dialog_open = true;
    }

    /// Clear the creation form back to its defaults
    pub fn reset_ui(&self, form: &mut CreateEventForm) {
        form.reset();
        debug!("Creation form reset");
    }

    /// Upload the image chosen for `target` and remember the stored path.
    ///
    /// Returns the stored path, or `None` after alerting the operator with
    /// the server's reply.
    pub async fn upload_image(
        &self,
        page: &mut AdminPage,
        form: &mut CreateEventForm,
        target: UploadTarget,
    ) -> Option<String> {
        let slot = form.slot_mut(target);

        match self.api.upload_image(slot.file.as_ref()).await {
            Ok(path) => {
                log_admin_action("upload_image", Some(target.name()), Some(&path));
                slot.store_path(path.clone());
                Some(path)
            }
            Err(e) => {
                log_api_error("image", &e.to_string(), Some(target.name()));
                page.alert(e.operator_message());
                None
            }
        }
    }

    /// Publish the event described by the form.
    ///
    /// Nothing is checked locally; whatever the form holds is submitted. On
    /// success the event gets a zero applying-user count, its thumbnail is
    /// resolved, a row is added to the events table and the dialog closes.
    pub async fn publish_event(&self, page: &mut AdminPage, form: &CreateEventForm) -> Option<Event> {
        let request = form.to_create_request();

        let mut event = match self.api.create_event(&request).await {
            Ok(event) => event,
            Err(e) => {
                log_api_error("events", &e.to_string(), Some("create"));
                page.alert(e.operator_message());
                return None;
            }
        };

        event.set_applying_user_count(0);
        log_admin_action("publish_event", Some(&event.id), event.title());

        let thumbnail = event.thumbnail().unwrap_or_default().to_string();
        if let Some(img) = self.resolve_thumbnail(page, &thumbnail).await {
            if let Err(e) = self.display_event(page, &event, &img).await {
                error!(event_id = %event.id, error = %e, "Failed to display published event");
            }
        }

        page.create_dialog_open = false;
        Some(event)
    }

    /// Find the image to show for an uploaded asset.
    ///
    /// A resized variant yields its public URL; a missing variant (404)
    /// yields the configured default image. Any other failure alerts the
    /// operator and yields `None`.
    pub async fn resolve_thumbnail(&self, page: &mut AdminPage, image_name: &str) -> Option<String> {
        match self
            .api
            .get_thumbnail(image_name, &self.settings.assets.thumbnail_size)
            .await
        {
            Ok(resized) => Some(self.image_url(&resized)),
            Err(e) if e.as_api().map(|api| api.is_not_found()).unwrap_or(false) => {
                debug!(image_name = image_name, "No thumbnail variant, using default image");
                Some(self.settings.assets.default_image.clone())
            }
            Err(e) => {
                log_api_error("thumbnail", &e.to_string(), Some(image_name));
                page.alert(e.operator_message());
                None
            }
        }
    }

    /// Public URL of a stored image
    pub fn image_url(&self, image_path: &str) -> String {
        format!("http://{}/images/{}", self.settings.server.public_host, image_path)
    }

    /// Render an event as a row of the events table
    pub async fn display_event(&self, page: &mut AdminPage, event: &Event, img: &str) -> Result<()> {
        let template = self.templates.fetch(TemplateKind::EventCreate).await?;
        let html = template.render(&EventRow { event, img })?;
        page.append_event_row(&event.id, html);
        Ok(())
    }

    /// Delete an event and drop its row from the events table
    pub async fn revoke_event(&self, page: &mut AdminPage, event_id: &str) -> bool {
        match self.api.revoke_event(event_id).await {
            Ok(()) => {
                log_admin_action("revoke_event", Some(event_id), None);
                page.alert(format!("Event revoked: {}", event_id));
                page.remove_element(&event_row_id(event_id));
                true
            }
            Err(e) => {
                log_api_error("admin/events", &e.to_string(), Some(event_id));
                let cause = e
                    .as_api()
                    .and_then(|api| api.troubleshooting.clone())
                    .unwrap_or_else(|| e.operator_message());
                page.alert(format!("Revoking event failed due to {}", cause));
                false
            }
        }
    }

    /// Open the admin detail page of the event named by `sender_text`
    pub fn show_details(&self, page: &mut AdminPage, sender_text: &str) -> Result<()> {
        let url = self
            .api
            .url(&format!("/admin/events/{}", path_segment(sender_text.trim())))?;
        info!(url = %url, "Opening event details");
        page.open_window(url.to_string());
        Ok(())
    }

    /// Append a row for a published idea to the ideas table
    pub fn display_idea(&self, page: &mut AdminPage, idea: &Idea, img: &str) {
        let id = escape_html(&idea.id);
        let html = format!(
            concat!(
                "<tr>",
                "<td>{id}</td>",
                "<td><img height=\"80\" src=\"{img}\"/></td>",
                "<td>{title}</td>",
                "<td>{description}</td>",
                "<td>{liked}</td>",
                "<td>{followers}</td>",
                "<td><a id=\"{id}\" onclick=\"unpublishIdea();\" href=\"\">Unpublish</a></td>",
                "</tr>"
            ),
            id = id,
            img = escape_html(img),
            title = escape_html(idea.title.as_deref().unwrap_or("")),
            description = escape_html(idea.description.as_deref().unwrap_or("")),
            liked = idea.liked_users.len(),
            followers = idea.followers.len(),
        );
        page.append_idea_row(html);
    }
}
