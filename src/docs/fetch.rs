//! Retrieval of raw package pages.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::DocError;
use crate::metrics;

/// Raw markup of a package page together with the URL it came from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub markup: String,
}

/// Source of package documentation pages.
///
/// Implementations perform exactly one retrieval attempt per call; retry and
/// timeout policy belong to the implementation, not to callers.
#[async_trait]
pub trait DocFetcher: Send + Sync {
    /// Fetch the page for `package`
    async fn fetch(&self, package: &str) -> Result<FetchedPage, DocError>;

    /// Get the fetcher name for logging
    fn fetcher_name(&self) -> &'static str;
}

/// Fetches pages over HTTP from a pkg.go.dev compatible site
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    /// URL of the page documenting `package`
    pub fn page_url(&self, package: &str) -> String {
        format!("{}{}", self.base_url, package)
    }
}

#[async_trait]
impl DocFetcher for HttpFetcher {
    async fn fetch(&self, package: &str) -> Result<FetchedPage, DocError> {
        let url = self.page_url(package);
        let start = Instant::now();
        metrics::FETCH_REQUESTS.inc();

        let fetch_error = |e: reqwest::Error| {
            metrics::FETCH_ERRORS.inc();
            DocError::Fetch {
                package: package.to_string(),
                reason: e.to_string(),
            }
        };

        let response = self.client.get(&url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            // Unknown packages answer 404 with a regular page; it extracts
            // to an empty Doc which callers report as "not found".
            warn!(url = %url, status = %status, "Package page returned non-success status");
        }

        let markup = response.text().await.map_err(fetch_error)?;
        metrics::FETCH_LATENCY.observe(start.elapsed().as_secs_f64());

        debug!(url = %url, bytes = markup.len(), "Fetched package page");

        Ok(FetchedPage { url, markup })
    }

    fn fetcher_name(&self) -> &'static str {
        "http"
    }
}

fn normalize_base_url(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}
