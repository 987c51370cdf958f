use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pkgdoc::config::FetchConfig;
use pkgdoc::docs::{DocFetcher, FetchedPage};
use pkgdoc::{DocError, DocService};

use super::fixtures::{ERRORS_PAGE, NET_HTTP_PAGE, STRINGS_PAGE};

/// Serves canned pages from memory; unknown packages fail like a refused
/// connection
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fetcher serving `strings`, `net/http` and `errors`
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_page("strings", STRINGS_PAGE)
            .with_page("net/http", NET_HTTP_PAGE)
            .with_page("errors", ERRORS_PAGE)
    }

    pub fn with_page(mut self, package: &str, markup: &str) -> Self {
        self.pages.insert(package.to_string(), markup.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocFetcher for StaticFetcher {
    async fn fetch(&self, package: &str) -> Result<FetchedPage, DocError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.pages.get(package) {
            Some(markup) => Ok(FetchedPage {
                url: format!("https://pkg.go.dev/{}", package),
                markup: markup.clone(),
            }),
            None => Err(DocError::Fetch {
                package: package.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }

    fn fetcher_name(&self) -> &'static str {
        "static"
    }
}

/// Documentation service over the fixture pages, with default cache settings
pub fn fixture_service() -> (Arc<StaticFetcher>, Arc<DocService>) {
    let fetcher = Arc::new(StaticFetcher::with_fixtures());
    let service = DocService::new(fetcher.clone(), &FetchConfig::default());
    (fetcher, Arc::new(service))
}
