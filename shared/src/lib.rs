//! Instana Gateway Shared Library
//!
//! This crate contains the data models, configuration, and Instana client
//! used across the Instana gateway.
//!
//! # Modules
//!
//! - [`models`] - Data models for reduced metrics results
//! - [`config`] - Instana backend configuration
//! - [`client`] - The query-and-reduce client for the Instana APM backend
//!
//! # Example
//!
//! ```no_run
//! use shared::client::{InstanaApi, InstanaClient};
//! use shared::config::InstanaConfig;
//!
//! # async fn example() -> Result<(), shared::client::ClientError> {
//! let config = InstanaConfig::new("https://instana.example.com", "secret-token");
//! let client = InstanaClient::new(config);
//!
//! let result = client.get_application_metrics("xyz123").await?;
//! println!("{}: {:?}", result.entity_id, result.metrics);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod models;

/// Re-export common dependencies for convenience.
pub use serde;
pub use serde_json;
