//! Subcommand implementations.

pub mod doc;
pub mod init;
pub mod pages;
pub mod serve;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::docs::{DocService, HttpFetcher};

/// Documentation service backed by the configured site
pub(crate) fn doc_service(config: &Config) -> Result<Arc<DocService>> {
    let fetcher =
        HttpFetcher::new(&config.fetch).context("Failed to initialize documentation fetcher")?;
    Ok(Arc::new(DocService::new(Arc::new(fetcher), &config.fetch)))
}
