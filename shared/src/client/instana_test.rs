//! Facade tests against a mock Instana backend.
//!
//! These exercise the full build-query, POST, reduce pipeline with canned
//! backend responses mirroring real Instana payloads.

use super::*;
use httpmock::{Method::POST, MockServer};
use serde_json::json;

const WINDOW_SIZE: u64 = 132_456;

fn client_for(server: &MockServer) -> InstanaClient {
    let config =
        InstanaConfig::new(server.base_url(), "abcdef").with_window_size(WINDOW_SIZE);
    InstanaClient::new(config)
}

/// Empty service and application responses are identical.
fn empty_items_response() -> serde_json::Value {
    json!({
        "items": [],
        "page": 1,
        "pageSize": 20,
        "totalHits": 0,
        "adjustedTimeframe": { "windowSize": WINDOW_SIZE },
    })
}

fn items_response() -> serde_json::Value {
    json!({
        "items": [{
            "application": { "id": "xyz123" },
            "metrics": {
                "latency.p90": [[132, 25.0]],
                "calls.per_second": [[132, 5.26483451536643]],
                "latency.mean": [[132, 323.4512522311155]],
                "latency.p99": [[132, 47.0]],
                "latency.p50": [[132, 10.0]],
            },
        }],
        "page": 1,
        "pageSize": 20,
        "totalHits": 1,
        "adjustedTimeframe": { "windowSize": WINDOW_SIZE },
    })
}

/// A tag filter that matches no website returns zero-valued series, except
/// response time which comes back as a literal empty series.
fn empty_website_response() -> serde_json::Value {
    json!({
        "metrics": {
            "uniqueUsers.distinct_count": [[321, 0.0]],
            "uniqueSessions.distinct_count": [[321, 0.0]],
            "errors.sum": [[321, 0.0]],
            "http5xx.sum": [[321, 0.0]],
            "responseTime.p90": [],
        },
        "adjustedTimeframe": { "windowSize": WINDOW_SIZE },
    })
}

fn website_response() -> serde_json::Value {
    json!({
        "metrics": {
            "uniqueUsers.distinct_count": [[321, 5.0]],
            "uniqueSessions.distinct_count": [[321, 23.0]],
            "errors.sum": [[321, 1.0]],
            "http5xx.sum": [[321, 0.0]],
            "responseTime.p90": [[321, 2.0]],
        },
        "adjustedTimeframe": { "windowSize": WINDOW_SIZE },
    })
}

#[tokio::test]
async fn test_application_metrics_are_reduced_and_stamped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/applications")
                .json_body_partial(r#"{ "applicationId": "xyz123" }"#);
            then.status(200).json_body(items_response());
        })
        .await;

    let result = client_for(&server)
        .get_application_metrics("xyz123")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.entity_id, "xyz123");
    assert_eq!(result.entity_type, EntityKind::Application);
    assert_eq!(result.window_size, WINDOW_SIZE);
    assert_eq!(result.metrics["latency.p90"], 25.0);
    assert_eq!(result.metrics["calls.per_second"], 5.26483451536643);
    assert_eq!(result.metrics["latency.mean"], 323.4512522311155);
    assert_eq!(result.metrics["latency.p99"], 47.0);
    assert_eq!(result.metrics["latency.p50"], 10.0);
}

#[tokio::test]
async fn test_application_without_items_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/applications");
            then.status(200).json_body(empty_items_response());
        })
        .await;

    let err = client_for(&server)
        .get_application_metrics("foo")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_service_metrics_are_reduced_and_stamped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/services")
                .json_body_partial(r#"{ "serviceId": "service123" }"#);
            then.status(200).json_body(items_response());
        })
        .await;

    let result = client_for(&server)
        .get_service_metrics("service123")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.entity_id, "service123");
    assert_eq!(result.entity_type, EntityKind::Service);
    assert_eq!(result.window_size, WINDOW_SIZE);
    assert_eq!(result.metrics.len(), 5);
}

#[tokio::test]
async fn test_service_without_items_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/services");
            then.status(200).json_body(empty_items_response());
        })
        .await;

    let err = client_for(&server)
        .get_service_metrics("foo")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_website_metrics_are_reduced_and_stamped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/website-monitoring/v2/metrics")
                .json_body_partial(
                    r#"{ "tagFilterExpression": { "value": "website123" } }"#,
                );
            then.status(200).json_body(website_response());
        })
        .await;

    let result = client_for(&server)
        .get_website_metrics("website123")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.entity_id, "website123");
    assert_eq!(result.entity_type, EntityKind::Website);
    assert_eq!(result.window_size, WINDOW_SIZE);
    assert_eq!(result.metrics["uniqueUsers.distinct_count"], 5.0);
    assert_eq!(result.metrics["uniqueSessions.distinct_count"], 23.0);
    assert_eq!(result.metrics["errors.sum"], 1.0);
    assert_eq!(result.metrics["http5xx.sum"], 0.0);
    assert_eq!(result.metrics["responseTime.p90"], 2.0);
}

#[tokio::test]
async fn test_website_with_empty_response_time_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/website-monitoring/v2/metrics");
            then.status(200).json_body(empty_website_response());
        })
        .await;

    let err = client_for(&server)
        .get_website_metrics("foo")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_backend_failure_carries_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/applications");
            then.status(400);
        })
        .await;

    let err = client_for(&server)
        .get_application_metrics("anything")
        .await
        .unwrap_err();

    match err {
        ClientError::Backend { status, .. } => assert_eq!(status, 400),
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_unexpected_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/applications");
            then.status(200).json_body(json!({ "items": "not-a-list" }));
        })
        .await;

    let err = client_for(&server)
        .get_application_metrics("anything")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_repeated_calls_are_idempotent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/application-monitoring/metrics/applications");
            then.status(200).json_body(items_response());
        })
        .await;

    let client = client_for(&server);
    let first = client.get_application_metrics("xyz123").await.unwrap();
    let second = client.get_application_metrics("xyz123").await.unwrap();

    assert_eq!(first, second);
}
