//! API route definitions.
//!
//! This module organizes all HTTP routes for the Instana gateway server.

mod health;
mod metrics;

pub use health::health_routes;
pub use metrics::metrics_routes;
