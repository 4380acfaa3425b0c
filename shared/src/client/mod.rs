//! The query-and-reduce client for the Instana APM backend.
//!
//! One facade call performs exactly one backend round trip: the [`query`]
//! module builds the kind-specific payload, [`transport`] performs the POST,
//! and [`reduce`] collapses the raw time-series response into a flat
//! [`crate::models::ReducedMetrics`] map.

pub mod error;
pub mod instana;
pub mod query;
pub mod reduce;
pub mod transport;

pub use error::ClientError;
pub use instana::{InstanaApi, InstanaClient};
pub use transport::Transport;
