//! Entity metrics endpoints.
//!
//! One GET route per entity kind, each returning the facade's
//! [`MetricsResult`] JSON verbatim. All three share one error-to-status
//! translator: "no data" maps to 404, everything else to a generic 5xx with
//! no backend error text leaked beyond a log line.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use shared::client::ClientError;
use shared::models::MetricsResult;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct MetricsError {
    /// Stable machine-readable error tag.
    pub error: &'static str,
    /// Human-readable message, free of backend internals.
    pub message: String,
}

/// Creates the entity metrics routes.
pub fn metrics_routes(state: AppState) -> Router {
    Router::new()
        .route("/applications/{application_id}", get(get_application_metrics))
        .route("/services/{service_id}", get(get_service_metrics))
        .route("/websites/{website_id}", get(get_website_metrics))
        .with_state(state)
}

async fn get_application_metrics(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<MetricsResult>, (StatusCode, Json<MetricsError>)> {
    state
        .instana()
        .get_application_metrics(&application_id)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn get_service_metrics(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<MetricsResult>, (StatusCode, Json<MetricsError>)> {
    state
        .instana()
        .get_service_metrics(&service_id)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn get_website_metrics(
    State(state): State<AppState>,
    Path(website_id): Path<String>,
) -> Result<Json<MetricsResult>, (StatusCode, Json<MetricsError>)> {
    state
        .instana()
        .get_website_metrics(&website_id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Translates client errors into HTTP responses.
///
/// `NotFound` is a normal outcome and keeps its message; backend and contract
/// failures are logged here and answered with a generic body.
fn error_response(err: ClientError) -> (StatusCode, Json<MetricsError>) {
    match err {
        ClientError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(MetricsError {
                error: "not_found",
                message: err.to_string(),
            }),
        ),
        ClientError::Backend { .. } | ClientError::Http(_) => {
            tracing::warn!(error = %err, "Instana backend request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(MetricsError {
                    error: "bad_gateway",
                    message: "Upstream metrics request failed".to_string(),
                }),
            )
        }
        ClientError::UnexpectedResponse(_) => {
            tracing::error!(error = %err, "Instana backend contract violation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MetricsError {
                    error: "internal_error",
                    message: "Unexpected upstream response".to_string(),
                }),
            )
        }
    }
}
