//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use docmark_core::{Config, FormatPolicy};
use docmark_gateway::{HttpMarkdownGateway, HttpMarkdownGatewayConfig};

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let policy = Arc::new(FormatPolicy::new(config.accepted_content_types.iter()));

    let gateway = HttpMarkdownGateway::new(HttpMarkdownGatewayConfig {
        endpoint: config.conversion_api_url.clone(),
        api_token: config.conversion_api_token.clone(),
        timeout: Duration::from_secs(config.conversion_timeout_seconds),
    })
    .context("Failed to construct conversion gateway")?;

    let state = Arc::new(AppState {
        config: config.clone(),
        policy,
        gateway: Arc::new(gateway),
    });

    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
