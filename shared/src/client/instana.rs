//! The Instana metrics facade.
//!
//! [`InstanaApi`] is the only surface the route layer and CLI consume;
//! [`InstanaClient`] implements it by composing the query builder, the
//! transport, and the reducer. One call, one backend round trip.

use super::error::ClientError;
use super::query;
use super::reduce;
use super::transport::Transport;
use crate::config::InstanaConfig;
use crate::models::{EntityKind, MetricsResult, ReducedMetrics};
use async_trait::async_trait;

/// Backend path for application metrics queries.
const APPLICATION_METRICS_PATH: &str = "api/application-monitoring/metrics/applications";
/// Backend path for service metrics queries.
const SERVICE_METRICS_PATH: &str = "api/application-monitoring/metrics/services";
/// Backend path for website metrics queries.
const WEBSITE_METRICS_PATH: &str = "api/website-monitoring/v2/metrics";

/// Uniform access to reduced Instana metrics, one operation per entity kind.
///
/// Every operation returns a [`MetricsResult`] stamped with the identifier it
/// was called with, the entity kind, and the configured window size.
#[async_trait]
pub trait InstanaApi: Send + Sync {
    /// Fetches and reduces metrics for one application.
    async fn get_application_metrics(
        &self,
        application_id: &str,
    ) -> Result<MetricsResult, ClientError>;

    /// Fetches and reduces metrics for one service.
    async fn get_service_metrics(&self, service_id: &str) -> Result<MetricsResult, ClientError>;

    /// Fetches and reduces metrics for one website.
    async fn get_website_metrics(&self, website_id: &str) -> Result<MetricsResult, ClientError>;
}

/// The production [`InstanaApi`] implementation.
///
/// Holds only read-only state (config and transport), so one instance is
/// shared freely across concurrent requests. Nothing is cached: every call
/// queries the backend and builds a fresh result.
pub struct InstanaClient {
    config: InstanaConfig,
    transport: Transport,
}

impl InstanaClient {
    /// Creates a client for the configured backend.
    #[must_use]
    pub fn new(config: InstanaConfig) -> Self {
        let transport = Transport::new(config.base_url.clone(), config.token.clone());
        Self { config, transport }
    }

    /// Wraps reduced metrics into the canonical result, or classifies the
    /// reducer's "no data" signal as [`ClientError::NotFound`].
    fn into_result(
        &self,
        entity_id: &str,
        entity_type: EntityKind,
        reduced: Option<ReducedMetrics>,
    ) -> Result<MetricsResult, ClientError> {
        match reduced {
            Some(metrics) => Ok(MetricsResult::new(
                entity_id,
                entity_type,
                self.config.window_size,
                metrics,
            )),
            None => Err(ClientError::NotFound {
                entity_type,
                entity_id: entity_id.to_string(),
            }),
        }
    }
}

#[async_trait]
impl InstanaApi for InstanaClient {
    async fn get_application_metrics(
        &self,
        application_id: &str,
    ) -> Result<MetricsResult, ClientError> {
        let payload = query::application_query(application_id, self.config.window_size);
        let raw = self.transport.post(APPLICATION_METRICS_PATH, &payload).await?;
        let reduced = reduce::reduce_item_metrics(raw)?;
        self.into_result(application_id, EntityKind::Application, reduced)
    }

    async fn get_service_metrics(&self, service_id: &str) -> Result<MetricsResult, ClientError> {
        let payload = query::service_query(service_id, self.config.window_size);
        let raw = self.transport.post(SERVICE_METRICS_PATH, &payload).await?;
        let reduced = reduce::reduce_item_metrics(raw)?;
        self.into_result(service_id, EntityKind::Service, reduced)
    }

    async fn get_website_metrics(&self, website_id: &str) -> Result<MetricsResult, ClientError> {
        let payload = query::website_query(website_id, self.config.window_size);
        let raw = self.transport.post(WEBSITE_METRICS_PATH, &payload).await?;
        let reduced = reduce::reduce_website_metrics(raw)?;
        self.into_result(website_id, EntityKind::Website, reduced)
    }
}

#[cfg(test)]
#[path = "instana_test.rs"]
mod instana_test;
