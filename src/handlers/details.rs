//! Event detail page
//!
//! Loads an event, renders its detail panel and one panel per user
//! category. Each category fans out one profile request per user and
//! renders once the join completes.

use std::time::Duration;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use crate::config::{AggregationConfig, FailurePolicy};
use crate::models::{Category, Event, UserIds, UserProfile};
use crate::services::api::AdsApiClient;
use crate::services::templates::{CompiledTemplate, TemplateKind, TemplateService};
use crate::state::AdminPage;
use crate::utils::errors::{AdminError, Result};
use crate::utils::logging::{log_aggregation, log_api_error};

/// Data handed to the users template
#[derive(Debug, Serialize)]
struct UsersPanel<'a> {
    title: &'a str,
    profiles: &'a [UserProfile],
}

/// What happened to one category panel
#[derive(Debug, Clone)]
pub struct PanelOutcome {
    pub category: Category,
    /// Number of profile requests issued
    pub requested: usize,
    /// Profiles received, in arrival order
    pub profiles: Vec<UserProfile>,
    pub failed: usize,
    pub timed_out: bool,
    /// Rendered markup, `None` when the panel was dropped
    pub html: Option<String>,
}

impl PanelOutcome {
    pub fn rendered(&self) -> bool {
        self.html.is_some()
    }

    pub fn complete(&self) -> bool {
        self.failed == 0 && !self.timed_out
    }
}

/// Result of loading the detail page
#[derive(Debug, Clone)]
pub struct DetailReport {
    pub event: Event,
    /// Category panels in the order their joins finished
    pub panels: Vec<PanelOutcome>,
}

impl DetailReport {
    pub fn panel(&self, category: Category) -> Option<&PanelOutcome> {
        self.panels.iter().find(|p| p.category == category)
    }
}

#[derive(Clone, Debug)]
pub struct DetailAggregator {
    api: AdsApiClient,
    templates: TemplateService,
    aggregation: AggregationConfig,
}

impl DetailAggregator {
    pub fn new(api: AdsApiClient, templates: TemplateService, aggregation: AggregationConfig) -> Self {
        Self {
            api,
            templates,
            aggregation,
        }
    }

    /// Render the detail panel and the three category panels of an event.
    ///
    /// Failures to fetch the event or a template are logged and returned;
    /// they never reach the operator as an alert. When one template fails
    /// the other one is still rendered.
    pub async fn load_event_details(&self, page: &mut AdminPage, event_id: &str) -> Result<DetailReport> {
        info!(event_id = event_id, "Loading event details");

        let event = self.api.get_event(event_id).await.map_err(|e| {
            log_api_error("events", &e.to_string(), Some(event_id));
            e
        })?;

        let (details, users) = futures::join!(
            self.templates.fetch(TemplateKind::EventDetails),
            self.templates.fetch(TemplateKind::EventUsers),
        );

        let mut first_error: Option<AdminError> = None;

        match details.and_then(|template| template.render(&event)) {
            Ok(html) => page.set_main(html),
            Err(e) => {
                log_api_error("templates", &e.to_string(), Some(TemplateKind::EventDetails.name()));
                first_error = Some(e);
            }
        }

        let panels = match users {
            Ok(template) => {
                let (panels, render_error) = self.render_categories(page, &template, &event).await;
                if let Some(e) = render_error {
                    first_error.get_or_insert(e);
                }
                panels
            }
            Err(e) => {
                log_api_error("templates", &e.to_string(), Some(TemplateKind::EventUsers.name()));
                first_error.get_or_insert(e);
                Vec::new()
            }
        };

        if let Some(e) = first_error {
            return Err(e);
        }

        Ok(DetailReport { event, panels })
    }

    /// Run every category concurrently, appending each panel as its join finishes.
    ///
    /// A category that fails to render does not stop the others; the first
    /// such error is handed back next to the panels that did finish.
    async fn render_categories(
        &self,
        page: &mut AdminPage,
        template: &CompiledTemplate,
        event: &Event,
    ) -> (Vec<PanelOutcome>, Option<AdminError>) {
        let category_ids: Vec<_> = Category::ALL
            .iter()
            .map(|&category| (category, category.user_ids(event)))
            .collect();

        let mut pending: FuturesUnordered<_> = category_ids
            .iter()
            .map(|(category, ids)| self.render_users(template, ids, *category))
            .collect();

        let mut panels = Vec::with_capacity(Category::ALL.len());
        let mut first_error = None;
        while let Some(outcome) = pending.next().await {
            match outcome {
                Ok(outcome) => {
                    if let Some(html) = &outcome.html {
                        page.append_aside(html.clone());
                    }
                    panels.push(outcome);
                }
                Err(e) => {
                    error!(error = %e, "Failed to render category panel");
                    first_error.get_or_insert(e);
                }
            }
        }

        (panels, first_error)
    }

    /// Fetch every profile in `ids` in parallel and render one panel.
    ///
    /// Profiles are listed in the order their responses arrive. The panel is
    /// rendered exactly once after all requests settle; on a failure or when
    /// the join outlives `profile_timeout_ms` the configured
    /// [`FailurePolicy`] decides between dropping the panel and rendering
    /// what arrived.
    pub async fn render_users(
        &self,
        template: &CompiledTemplate,
        ids: &UserIds,
        category: Category,
    ) -> Result<PanelOutcome> {
        let requested = ids.len();
        debug!(category = %category, requested = requested, "Fetching category profiles");

        let mut pending: FuturesUnordered<_> = ids
            .iter()
            .map(|id| async move { (id, self.api.get_profile(id).await) })
            .collect();

        let mut profiles = Vec::with_capacity(requested);
        let mut failed = 0;
        let mut timed_out = false;

        let deadline = tokio::time::sleep(Duration::from_millis(self.aggregation.profile_timeout_ms));
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                next = pending.next() => match next {
                    Some((_, Ok(profile))) => profiles.push(profile),
                    Some((id, Err(e))) => {
                        warn!(category = %category, user_id = %id, error = %e, "Profile fetch failed");
                        failed += 1;
                        if self.aggregation.failure_policy == FailurePolicy::FailPanel {
                            break;
                        }
                    }
                    None => break,
                },
                _ = &mut deadline => {
                    timed_out = true;
                    break;
                }
            }
        }

        if timed_out {
            warn!(
                category = %category,
                outstanding = pending.len(),
                "Profile fetches timed out"
            );
        }

        let complete = failed == 0 && !timed_out;
        let html = if complete || self.aggregation.failure_policy == FailurePolicy::RenderPartial {
            Some(template.render(&UsersPanel {
                title: category.label(),
                profiles: &profiles,
            })?)
        } else {
            None
        };

        log_aggregation(category.label(), requested, profiles.len(), html.is_some());

        Ok(PanelOutcome {
            category,
            requested,
            profiles,
            failed,
            timed_out,
            html,
        })
    }
}
