//! Data models for the Instana gateway.
//!
//! This module contains the core data structures for reduced metrics results.

pub mod metrics;

pub use metrics::{EntityKind, MetricSeries, MetricsResult, ReducedMetrics};
