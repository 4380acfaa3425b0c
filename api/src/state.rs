//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::client::{InstanaApi, InstanaClient};
use shared::config::InstanaConfig;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// Holds the Instana client behind its trait, so integration tests can
/// substitute a mock backend without any network.
#[derive(Clone)]
pub struct AppState {
    instana: Arc<dyn InstanaApi>,
}

impl AppState {
    /// Creates a new application state around the given Instana API.
    pub fn new(instana: Arc<dyn InstanaApi>) -> Self {
        Self { instana }
    }

    /// Creates an application state with the production client for the
    /// given backend configuration.
    #[must_use]
    pub fn with_client(config: InstanaConfig) -> Self {
        Self {
            instana: Arc::new(InstanaClient::new(config)),
        }
    }

    /// Returns a reference to the Instana API.
    #[must_use]
    pub fn instana(&self) -> &dyn InstanaApi {
        self.instana.as_ref()
    }
}
