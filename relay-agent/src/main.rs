//! Relay Agent
//!
//! A worker process that polls the Relay server for queued tasks,
//! executes their shell commands, and reports results back.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - Client: HTTP communication with the server (relay-client)
//! - Runner: Shell command execution with output capture
//! - Poller: Polling loop driving the task lifecycle
//!
//! Multiple agents may run against one server; the server's claim
//! operation guarantees each task is handed to at most one of them.

mod config;
mod poller;
mod runner;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poller::TaskPoller;
use relay_client::ServerClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Relay Agent");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: server_url={}, poll_interval={:?}",
        config.server_url, config.poll_interval
    );

    // Initialize server client with a bounded request timeout. The
    // timeout bounds the HTTP calls, not command execution.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let client = Arc::new(ServerClient::with_client(
        config.server_url.clone(),
        http_client,
    ));

    info!("Server client initialized");

    // Start polling loop
    let poller = TaskPoller::new(config, client);
    poller.run().await;

    Ok(())
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    match Config::from_env() {
        Ok(config) => {
            config.validate()?;
            Ok(config)
        }
        Err(_) => {
            info!("Failed to load config from environment, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}
