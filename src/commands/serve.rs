//! HTTP API command implementation.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::doc_service;
use crate::config::Config;
use crate::pages::PageRegistry;
use crate::web::{AppState, WebServer};

/// Run the HTTP API until the process is stopped
///
/// # Arguments
///
/// * `host` - Address to bind, overrides `server.host`
/// * `port` - Port to bind, overrides `server.port`
pub async fn run(config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let docs = doc_service(&config)?;
    let pages = Arc::new(PageRegistry::from_config(&config.pages));
    let sweeper = Arc::clone(&pages)
        .start_sweeper(Duration::from_secs(config.pages.sweep_interval_secs.max(1)));

    info!(
        base_url = %config.fetch.base_url,
        page_size = pages.page_size(),
        idle_timeout_secs = pages.idle_timeout().as_secs(),
        "Starting documentation API"
    );

    let state = AppState::new(docs, pages, config);
    let result = WebServer::new(state).start(&host, port).await;

    sweeper.abort();
    result
}
