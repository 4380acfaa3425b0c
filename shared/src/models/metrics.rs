//! Reduced metrics data model.
//!
//! Defines the `MetricsResult` structure returned by the Instana client: a
//! flat map of scalar values keyed by dotted metric name, stamped with the
//! entity it was queried for and the time window it covers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of monitored entity a metrics query targets.
///
/// The kind determines both the request payload shape and the response shape
/// the Instana backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// An Instana application perspective.
    Application,
    /// A single service within an application.
    Service,
    /// A monitored website (end-user monitoring).
    Website,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Service => write!(f, "service"),
            Self::Website => write!(f, "website"),
        }
    }
}

/// A raw time series as returned by the backend: ordered
/// `(timestamp_millis, value)` points.
///
/// The series is empty when the backend has no data for the metric in the
/// window; otherwise it is expected to hold exactly one point, because the
/// query window is not subdivided.
pub type MetricSeries = Vec<(i64, f64)>;

/// Reduced metrics: dotted metric key (`"<metric>.<aggregation>"`, aggregation
/// lowercased) to a single scalar value.
///
/// A `BTreeMap` keeps iteration order deterministic, so serialized output and
/// test expectations never depend on backend key enumeration order.
pub type ReducedMetrics = BTreeMap<String, f64>;

/// The canonical result of one metrics query.
///
/// Created fresh per request and never mutated after construction. Serialized
/// field names follow the wire format consumed by the gateway's clients.
///
/// # Example
///
/// ```
/// use shared::models::{EntityKind, MetricsResult, ReducedMetrics};
///
/// let mut metrics = ReducedMetrics::new();
/// metrics.insert("latency.p90".to_string(), 25.0);
///
/// let result = MetricsResult::new("xyz123", EntityKind::Application, 86_400_000, metrics);
/// assert_eq!(result.entity_id, "xyz123");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    /// The identifier the caller queried for, unchanged.
    pub entity_id: String,
    /// The kind of entity the metrics belong to.
    pub entity_type: EntityKind,
    /// The trailing window, in milliseconds, the values were aggregated over.
    pub window_size: u64,
    /// One scalar value per dotted metric key.
    pub metrics: ReducedMetrics,
}

impl MetricsResult {
    /// Creates a new metrics result.
    #[must_use]
    pub fn new(
        entity_id: impl Into<String>,
        entity_type: EntityKind,
        window_size: u64,
        metrics: ReducedMetrics,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_type,
            window_size,
            metrics,
        }
    }
}
