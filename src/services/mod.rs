//! Services module
//!
//! This module contains the ADS API client and template service, plus a
//! factory wiring them into the admin panel handlers.

pub mod api;
pub mod templates;

// Re-export commonly used services
pub use api::AdsApiClient;
pub use templates::{CompiledTemplate, TemplateKind, TemplateService};

use crate::config::settings::Settings;
use crate::handlers::{DetailAggregator, PublishController};
use crate::utils::errors::Result;

/// Service factory for creating and sharing the admin panel components
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: AdsApiClient,
    pub templates: TemplateService,
    pub details: DetailAggregator,
    pub publisher: PublishController,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let api = AdsApiClient::new(&settings)?;
        let templates = TemplateService::new(api.clone(), settings.templates.clone());
        let details = DetailAggregator::new(
            api.clone(),
            templates.clone(),
            settings.aggregation.clone(),
        );
        let publisher = PublishController::new(api.clone(), templates.clone(), settings);

        Ok(Self {
            api,
            templates,
            details,
            publisher,
        })
    }
}
