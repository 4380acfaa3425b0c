//! Instana backend configuration.
//!
//! Handles loading the backend connection settings from environment variables
//! with sensible defaults.

use anyhow::{Context, Result};

/// Default trailing window: 24 hours in milliseconds.
pub const DEFAULT_WINDOW_SIZE_MS: u64 = 86_400_000;

/// Connection settings for the Instana APM backend.
///
/// Configuration values can be set via environment variables:
/// - `INSTANA_BASE_URL`: Base URL of the Instana backend (required)
/// - `INSTANA_API_TOKEN`: API token sent as `Authorization: apiToken <token>` (required)
/// - `INSTANA_WINDOW_SIZE_MS`: Trailing query window in milliseconds (default: 86400000)
#[derive(Debug, Clone)]
pub struct InstanaConfig {
    /// Base URL of the Instana backend, without a trailing path.
    pub base_url: String,
    /// Static API token, sent verbatim on every request.
    pub token: String,
    /// Trailing window, in milliseconds, every query is aggregated over.
    pub window_size: u64,
}

impl InstanaConfig {
    /// Creates a configuration with the default window size.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            window_size: DEFAULT_WINDOW_SIZE_MS,
        }
    }

    /// Sets the query window size in milliseconds.
    #[must_use]
    pub fn with_window_size(mut self, window_size: u64) -> Self {
        self.window_size = window_size;
        self
    }

    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `INSTANA_BASE_URL` or `INSTANA_API_TOKEN` is unset
    /// - `INSTANA_WINDOW_SIZE_MS` is set but cannot be parsed as an integer
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("INSTANA_BASE_URL")
            .context("INSTANA_BASE_URL must be set to the Instana backend base URL")?;
        let token = std::env::var("INSTANA_API_TOKEN")
            .context("INSTANA_API_TOKEN must be set to an Instana API token")?;

        let window_size = std::env::var("INSTANA_WINDOW_SIZE_MS")
            .ok()
            .map(|w| w.parse::<u64>())
            .transpose()
            .context("INSTANA_WINDOW_SIZE_MS must be an integer number of milliseconds")?
            .unwrap_or(DEFAULT_WINDOW_SIZE_MS);

        Ok(Self {
            base_url,
            token,
            window_size,
        })
    }
}
