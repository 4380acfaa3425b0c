//! Query payload construction.
//!
//! Builds the exact POST body for each entity kind. Pure data construction,
//! no side effects; field names are serialized in the camelCase wire format
//! the Instana backend expects.

use serde::Serialize;

/// The backend accepts at most this many metric+aggregation pairs per call.
///
/// If more metrics are ever added, the builder must split them across several
/// queries and the facade must merge the results. Until then the fixed lists
/// below stay at the cap and the constructors assert it.
pub const MAX_METRIC_PAIRS: usize = 5;

/// One requested metric and the statistical reduction to apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricPair {
    /// The metric name, e.g. `"latency"`.
    pub metric: &'static str,
    /// The aggregation, e.g. `"P90"` or `"DISTINCT_COUNT"`.
    pub aggregation: &'static str,
}

/// The trailing time window a query is aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrame {
    /// Window size in milliseconds, ending "now".
    pub window_size: u64,
}

/// Tag filter selecting a single website by its beacon identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFilter {
    #[serde(rename = "type")]
    kind: &'static str,
    entity: &'static str,
    name: &'static str,
    operator: &'static str,
    value: String,
}

/// Query payload for the application metrics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    application_id: String,
    metrics: Vec<MetricPair>,
    time_frame: TimeFrame,
}

/// Query payload for the service metrics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQuery {
    service_id: String,
    metrics: Vec<MetricPair>,
    time_frame: TimeFrame,
}

/// Query payload for the website metrics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteQuery {
    metrics: Vec<MetricPair>,
    #[serde(rename = "type")]
    beacon_type: &'static str,
    time_frame: TimeFrame,
    tag_filter_expression: TagFilter,
}

/// The metric set requested for applications and services.
const CALL_METRICS: [MetricPair; 5] = [
    MetricPair { metric: "calls", aggregation: "PER_SECOND" },
    MetricPair { metric: "latency", aggregation: "MEAN" },
    MetricPair { metric: "latency", aggregation: "P50" },
    MetricPair { metric: "latency", aggregation: "P90" },
    MetricPair { metric: "latency", aggregation: "P99" },
];

/// The metric set requested for websites (page-load beacons).
const BEACON_METRICS: [MetricPair; 5] = [
    MetricPair { metric: "uniqueUsers", aggregation: "DISTINCT_COUNT" },
    MetricPair { metric: "uniqueSessions", aggregation: "DISTINCT_COUNT" },
    MetricPair { metric: "errors", aggregation: "SUM" },
    MetricPair { metric: "http5xx", aggregation: "SUM" },
    MetricPair { metric: "responseTime", aggregation: "P90" },
];

/// Builds the query payload for one application.
#[must_use]
pub fn application_query(application_id: &str, window_size: u64) -> ApplicationQuery {
    debug_assert!(CALL_METRICS.len() <= MAX_METRIC_PAIRS);
    ApplicationQuery {
        application_id: application_id.to_string(),
        metrics: CALL_METRICS.to_vec(),
        time_frame: TimeFrame { window_size },
    }
}

/// Builds the query payload for one service.
#[must_use]
pub fn service_query(service_id: &str, window_size: u64) -> ServiceQuery {
    debug_assert!(CALL_METRICS.len() <= MAX_METRIC_PAIRS);
    ServiceQuery {
        service_id: service_id.to_string(),
        metrics: CALL_METRICS.to_vec(),
        time_frame: TimeFrame { window_size },
    }
}

/// Builds the query payload for one website, selected via a tag filter on
/// the beacon's website identifier.
#[must_use]
pub fn website_query(website_id: &str, window_size: u64) -> WebsiteQuery {
    debug_assert!(BEACON_METRICS.len() <= MAX_METRIC_PAIRS);
    WebsiteQuery {
        metrics: BEACON_METRICS.to_vec(),
        beacon_type: "PAGELOAD",
        time_frame: TimeFrame { window_size },
        tag_filter_expression: TagFilter {
            kind: "TAG_FILTER",
            entity: "NOT_APPLICABLE",
            name: "beacon.website.id",
            operator: "EQUALS",
            value: website_id.to_string(),
        },
    }
}
