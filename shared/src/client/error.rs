//! Client error taxonomy.

use crate::models::EntityKind;
use thiserror::Error;

/// Errors surfaced by the Instana client.
///
/// The classification policy is deliberately small: the transport classifies
/// only HTTP-level failure, the reducer classifies only the "no data"
/// condition, and the facade adds no classification of its own.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend responded with a non-2xx status. Opaque, never retried.
    #[error("Instana backend responded {status}: {status_text}")]
    Backend {
        /// The HTTP status code of the backend response.
        status: u16,
        /// The status text accompanying the code.
        status_text: String,
    },

    /// The backend responded successfully but has no data for the entity in
    /// the query window. A normal, expected outcome.
    #[error("no {entity_type} metrics found for '{entity_id}'")]
    NotFound {
        /// The kind of entity queried for.
        entity_type: EntityKind,
        /// The identifier queried for, unchanged.
        entity_id: String,
    },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("request to Instana backend failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a 2xx body whose shape does not match the
    /// documented response contract. Worth alerting on, not recoverable.
    #[error("unexpected Instana response shape: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns `true` if this is the "entity has no data" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
