//! HTTP transport to the Instana backend.
//!
//! Performs the network call and classifies HTTP-level failure only; response
//! shape validation belongs to the reducer.

use super::error::ClientError;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout. The backend aggregates a full window per call, so
/// slow responses happen, but the gateway still bounds its own latency.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A thin POST-only HTTP transport bound to one backend base URL and token.
///
/// Holds no per-call state; a single instance is shared safely across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl Transport {
    /// Creates a transport for the given backend.
    ///
    /// A trailing slash on `base_url` is accepted and normalized away.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which only
    /// happens when the TLS backend fails to initialize.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to construct HTTP client");
        Self {
            http,
            base_url,
            token: token.into(),
        }
    }

    /// POSTs `payload` as JSON to `path` under the configured base URL.
    ///
    /// Returns the parsed response body verbatim. Emits one info line per
    /// call with the resolved URL, and a warn line when the backend responds
    /// with a non-success status.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Backend`] when the backend responds non-2xx
    /// - [`ClientError::Http`] when the request itself fails
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        tracing::info!(%url, "Calling Instana backend");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("apiToken {}", self.token))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
            tracing::warn!(status = status.as_u16(), %status_text, "Instana response");
            return Err(ClientError::Backend {
                status: status.as_u16(),
                status_text,
            });
        }

        Ok(response.json().await?)
    }
}
