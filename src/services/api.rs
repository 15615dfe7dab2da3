//! ADS REST API client
//!
//! Thin typed wrapper over the ADS server endpoints the admin panel talks
//! to. Every non-success reply is turned into an [`ApiError`] carrying the
//! raw response text and the troubleshooting header, so callers can show the
//! operator exactly what the server said.

use std::time::Duration;
use reqwest::{multipart, Client, Response};
use tracing::{debug, info};
use url::Url;
use crate::config::settings::Settings;
use crate::models::{CreateEventRequest, Event, UserProfile};
use crate::state::ImageFile;
use crate::utils::errors::{AdminError, ApiError, Result};
use crate::utils::helpers::{path_segment, truncate_text};

/// Header the ADS server uses to explain a failed request
pub const TROUBLESHOOTING_HEADER: &str = "x-ads-troubleshooting";

/// Multipart field carrying the uploaded image
pub const UPLOAD_FIELD: &str = "file";

#[derive(Clone, Debug)]
pub struct AdsApiClient {
    client: Client,
    base_url: String,
}

impl AdsApiClient {
    /// Create a new client for the configured ADS server
    pub fn new(settings: &Settings) -> Result<Self> {
        // Fail early on a malformed base URL instead of on the first request
        Url::parse(&settings.server.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.http.timeout_seconds))
            .user_agent(settings.http.user_agent.as_str())
            .build()
            .map_err(AdminError::Http)?;

        Ok(Self {
            client,
            base_url: settings.server.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve an absolute API path (`/events/1`) against the base URL,
    /// keeping any path prefix the base URL carries.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// `GET /events/{id}`
    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        let url = self.url(&format!("/events/{}", path_segment(event_id)))?;
        debug!(event_id = event_id, url = %url, "Fetching event");

        let response = self.send(self.client.get(url)).await?;
        match check_status(response).await {
            Ok(response) => Ok(response.json().await?),
            Err(AdminError::Api(e)) if e.is_not_found() => Err(AdminError::EventNotFound {
                event_id: event_id.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// `GET /users/{id}/profile`
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        let url = self.url(&format!("/users/{}/profile", path_segment(user_id)))?;
        debug!(user_id = user_id, "Fetching user profile");

        let response = check_status(self.send(self.client.get(url)).await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch template source text from an absolute asset path
    pub async fn get_template(&self, path: &str) -> Result<String> {
        let url = self.url(path)?;
        debug!(path = path, "Fetching template");

        let response = check_status(self.send(self.client.get(url)).await?).await?;
        Ok(response.text().await?)
    }

    /// `POST /events`
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        let url = self.url("/events")?;
        debug!(title = %request.title, "Creating event");

        let response = check_status(self.send(self.client.post(url).json(request)).await?).await?;
        let event: Event = response.json().await?;

        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// `DELETE /admin/events/{id}`
    pub async fn revoke_event(&self, event_id: &str) -> Result<()> {
        let url = self.url(&format!("/admin/events/{}", path_segment(event_id)))?;
        debug!(event_id = event_id, "Revoking event");

        check_status(self.send(self.client.delete(url)).await?).await?;

        info!(event_id = event_id, "Event revoked");
        Ok(())
    }

    /// `POST /image`, returning the stored asset path as sent by the server.
    ///
    /// With no file chosen an empty form is sent and the server decides.
    pub async fn upload_image(&self, file: Option<&ImageFile>) -> Result<String> {
        let url = self.url("/image")?;

        let mut form = multipart::Form::new();
        if let Some(file) = file {
            debug!(file_name = %file.file_name, size = file.bytes.len(), "Uploading image");
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            form = form.part(UPLOAD_FIELD, part);
        } else {
            debug!("Uploading empty image form");
        }

        let response = check_status(self.send(self.client.post(url).multipart(form)).await?).await?;
        Ok(response.text().await?)
    }

    /// `GET /thumbnail/{imageName}/{size}`, returning the resized image name
    pub async fn get_thumbnail(&self, image_name: &str, size: &str) -> Result<String> {
        let url = self.url(&format!(
            "/thumbnail/{}/{}",
            path_segment(image_name),
            path_segment(size)
        ))?;
        debug!(image_name = image_name, size = size, "Fetching thumbnail");

        let response = check_status(self.send(self.client.get(url)).await?).await?;
        Ok(response.text().await?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                AdminError::Timeout(e.to_string())
            } else {
                AdminError::Http(e)
            }
        })
    }
}

/// Pass success replies through; turn anything else into an [`ApiError`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let troubleshooting = response
        .headers()
        .get(TROUBLESHOOTING_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.unwrap_or_default();

    debug!(
        status = %status,
        body = %truncate_text(&body, 200),
        troubleshooting = ?troubleshooting,
        "ADS API returned failure status"
    );

    Err(AdminError::Api(ApiError {
        status,
        body,
        troubleshooting,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> AdsApiClient {
        let mut settings = Settings::default();
        settings.server.base_url = base_url.to_string();
        AdsApiClient::new(&settings).unwrap()
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let client = client_for("http://ads.internal:9000/panel/");
        assert_eq!(
            client.url("/events/42").unwrap().as_str(),
            "http://ads.internal:9000/panel/events/42"
        );
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let mut settings = Settings::default();
        settings.server.base_url = "::nope".to_string();
        assert!(AdsApiClient::new(&settings).is_err());
    }
}
