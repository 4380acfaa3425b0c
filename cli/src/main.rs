//! Instana Gateway CLI
//!
//! Command-line interface for querying reduced Instana metrics directly,
//! without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! instana-gateway --help
//! instana-gateway application xyz123
//! instana-gateway service service123
//! instana-gateway website website123
//! ```
//!
//! The backend connection is configured via `INSTANA_BASE_URL`,
//! `INSTANA_API_TOKEN`, and optionally `INSTANA_WINDOW_SIZE_MS`.

#![deny(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::client::{ClientError, InstanaApi, InstanaClient};
use shared::config::InstanaConfig;

/// Instana gateway CLI - query reduced APM metrics
#[derive(Parser)]
#[command(name = "instana-gateway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query window in milliseconds (overrides INSTANA_WINDOW_SIZE_MS)
    #[arg(short, long)]
    window_size: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metrics for an application
    Application {
        /// The application identifier
        id: String,
    },
    /// Fetch metrics for a service
    Service {
        /// The service identifier
        id: String,
    },
    /// Fetch metrics for a website
    Website {
        /// The website identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = InstanaConfig::from_env()?;
    if let Some(window_size) = cli.window_size {
        config = config.with_window_size(window_size);
    }
    let client = InstanaClient::new(config);

    let result = match &cli.command {
        Commands::Application { id } => client.get_application_metrics(id).await,
        Commands::Service { id } => client.get_service_metrics(id).await,
        Commands::Website { id } => client.get_website_metrics(id).await,
    };

    match result {
        Ok(metrics) => {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
            Ok(())
        }
        Err(err @ ClientError::NotFound { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_a_command() {
        let cli = Cli::try_parse_from(["instana-gateway"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_application_command() {
        let cli = Cli::try_parse_from(["instana-gateway", "application", "xyz123"]).unwrap();
        assert!(matches!(cli.command, Commands::Application { id } if id == "xyz123"));
    }

    #[test]
    fn test_cli_window_size_flag() {
        let cli =
            Cli::try_parse_from(["instana-gateway", "-w", "132456", "website", "website123"])
                .unwrap();
        assert_eq!(cli.window_size, Some(132_456));
        assert!(matches!(cli.command, Commands::Website { id } if id == "website123"));
    }
}
