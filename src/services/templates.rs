//! Server-delivered Handlebars templates
//!
//! Templates live on the ADS server as HTML fragments. They are fetched on
//! demand (no caching), compiled into their own registry and rendered with
//! JSON data.

use std::sync::Arc;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::config::TemplatesConfig;
use crate::services::api::AdsApiClient;
use crate::utils::errors::{Result, TemplateError};

/// The admin templates the panel renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Main event detail panel
    EventDetails,
    /// One category of users on the detail page
    EventUsers,
    /// A row of the events table
    EventCreate,
}

impl TemplateKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::EventDetails => "event.details",
            TemplateKind::EventUsers => "event.users",
            TemplateKind::EventCreate => "event.create",
        }
    }

    pub fn path<'a>(&self, config: &'a TemplatesConfig) -> &'a str {
        match self {
            TemplateKind::EventDetails => &config.event_details,
            TemplateKind::EventUsers => &config.event_users,
            TemplateKind::EventCreate => &config.event_create,
        }
    }
}

/// A compiled template, cheap to clone and share between concurrent renders
#[derive(Clone)]
pub struct CompiledTemplate {
    name: &'static str,
    registry: Arc<Handlebars<'static>>,
}

impl std::fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTemplate").field("name", &self.name).finish()
    }
}

impl CompiledTemplate {
    /// Compile template source under the given name
    pub fn compile(name: &'static str, source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper("default", Box::new(default_helper));
        registry
            .register_template_string(name, source)
            .map_err(|e| TemplateError::Compilation(e.to_string()))?;

        Ok(Self {
            name,
            registry: Arc::new(registry),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instantiate the template with the given data
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        let html = self
            .registry
            .render(self.name, data)
            .map_err(TemplateError::Render)?;
        Ok(html)
    }
}

/// Fetches and compiles the admin templates
#[derive(Clone, Debug)]
pub struct TemplateService {
    api: AdsApiClient,
    config: TemplatesConfig,
}

impl TemplateService {
    pub fn new(api: AdsApiClient, config: TemplatesConfig) -> Self {
        Self { api, config }
    }

    /// Fetch a template from the server and compile it
    pub async fn fetch(&self, kind: TemplateKind) -> Result<CompiledTemplate> {
        let source = self.api.get_template(kind.path(&self.config)).await?;
        debug!(template = kind.name(), bytes = source.len(), "Compiling template");
        CompiledTemplate::compile(kind.name(), &source)
    }
}

/// Fallback for empty values: `{{default presenterTitle "-"}}`
fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let default = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    match h.param(0).map(|p| p.value()) {
        None | Some(Value::Null) => out.write(default)?,
        Some(Value::String(s)) if s.is_empty() => out.write(default)?,
        Some(Value::String(s)) => out.write(&handlebars::html_escape(s))?,
        Some(other) => out.write(&other.to_string())?,
    }

    Ok(())
}
