//! Cached access to package documentation

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::extract::extract;
use super::fetch::DocFetcher;
use super::model::Doc;
use crate::config::FetchConfig;
use crate::error::DocError;
use crate::metrics;

struct CachedDoc {
    doc: Arc<Doc>,
    fetched_at: Instant,
}

/// Fetches, extracts, and caches [`Doc`]s.
///
/// Entries older than the configured TTL are fetched again; a refreshed
/// entry replaces the old `Arc<Doc>`, which stays valid for whoever still
/// holds it.
pub struct DocService {
    fetcher: Arc<dyn DocFetcher>,
    cache: RwLock<HashMap<String, CachedDoc>>,
    ttl: Duration,
    capacity: usize,
}

impl DocService {
    /// Create a service with the cache settings from `config`
    pub fn new(fetcher: Arc<dyn DocFetcher>, config: &FetchConfig) -> Self {
        Self::with_cache(
            fetcher,
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_capacity,
        )
    }

    pub fn with_cache(fetcher: Arc<dyn DocFetcher>, ttl: Duration, capacity: usize) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::new()),
            ttl,
            capacity,
        }
    }

    /// Get the documentation for `package`, fetching it when not cached
    pub async fn get_doc(&self, package: &str) -> Result<Arc<Doc>, DocError> {
        let package = normalize_package(package)?;

        if let Some(doc) = self.cached(&package).await {
            metrics::DOC_CACHE_HITS.inc();
            debug!(package = %package, "Serving documentation from cache");
            return Ok(doc);
        }

        let page = self.fetcher.fetch(&package).await?;
        let doc = Arc::new(extract(&page.markup, &page.url, &package));

        info!(
            package = %package,
            fetcher = self.fetcher.fetcher_name(),
            functions = doc.functions.len(),
            types = doc.types.len(),
            "Loaded package documentation"
        );

        self.store(package, Arc::clone(&doc)).await;
        Ok(doc)
    }

    /// Number of cached packages, including expired entries not yet replaced
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn cached(&self, package: &str) -> Option<Arc<Doc>> {
        let cache = self.cache.read().await;
        cache
            .get(package)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.doc))
    }

    async fn store(&self, package: String, doc: Arc<Doc>) {
        if self.capacity == 0 {
            return;
        }

        let mut cache = self.cache.write().await;
        cache.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);

        if cache.len() >= self.capacity && !cache.contains_key(&package) {
            let oldest = cache
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                debug!(package = %oldest, "Evicting oldest cached documentation");
                cache.remove(&oldest);
            }
        }

        cache.insert(
            package,
            CachedDoc {
                doc,
                fetched_at: Instant::now(),
            },
        );
    }
}

/// Trim whitespace and surrounding slashes from a package identifier
pub fn normalize_package(package: &str) -> Result<String, DocError> {
    let normalized = package.trim().trim_matches('/');
    if normalized.is_empty() {
        return Err(DocError::InvalidPackage(package.to_string()));
    }
    Ok(normalized.to_string())
}
