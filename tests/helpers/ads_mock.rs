//! Mock ADS server for testing
//!
//! Wraps a wiremock server exposing the ADS endpoints the admin panel uses,
//! with helpers to mount typical responses.

#![allow(dead_code)]

use std::time::Duration;
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use ads_admin::config::{FailurePolicy, Settings};
use ads_admin::services::ServiceFactory;

use super::test_data::{CREATE_TEMPLATE, DETAILS_TEMPLATE, USERS_TEMPLATE};

pub const PUBLIC_HOST: &str = "ads.example.com";
pub const DEFAULT_IMAGE: &str = "/assets/images/default.png";

/// Mock ADS server for testing
pub struct AdsMockServer {
    pub server: MockServer,
}

impl AdsMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointing at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.server.base_url = self.server.uri();
        settings.server.public_host = PUBLIC_HOST.to_string();
        settings.assets.default_image = DEFAULT_IMAGE.to_string();
        settings.aggregation.profile_timeout_ms = 2_000;
        settings
    }

    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::new(self.settings()).expect("Failed to build services")
    }

    pub fn services_with(&self, timeout_ms: u64, policy: FailurePolicy) -> ServiceFactory {
        let mut settings = self.settings();
        settings.aggregation.profile_timeout_ms = timeout_ms;
        settings.aggregation.failure_policy = policy;
        ServiceFactory::new(settings).expect("Failed to build services")
    }

    /// Mount the three admin templates
    pub async fn mock_templates(&self) {
        for (template_path, source) in [
            ("/assets/templates/admin/event.details.tmpl.html", DETAILS_TEMPLATE),
            ("/assets/templates/admin/event.users.tmpl.html", USERS_TEMPLATE),
            ("/assets/templates/admin/event.create.tmpl.html", CREATE_TEMPLATE),
        ] {
            self.mock_text("GET", template_path, 200, source).await;
        }
    }

    /// Mount `GET /events/{id}`
    pub async fn mock_event(&self, event_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/events/{}", event_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount `GET /users/{id}/profile`, answered after `delay_ms`
    pub async fn mock_profile(&self, user_id: &str, name: &str, delay_ms: u64) {
        let body = serde_json::json!({ "id": user_id, "name": name });
        Mock::given(method("GET"))
            .and(path(format!("/users/{}/profile", user_id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount `GET /users/{id}/profile` answering with an arbitrary body
    pub async fn mock_profile_body(&self, user_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}/profile", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a failing `GET /users/{id}/profile`
    pub async fn mock_profile_failure(&self, user_id: &str, status: u16) {
        self.mock_text("GET", &format!("/users/{}/profile", user_id), status, "profile unavailable")
            .await;
    }

    /// Mount a plain-text reply
    pub async fn mock_text(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received for a path
    pub async fn request_count(&self, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == route)
            .count()
    }
}
