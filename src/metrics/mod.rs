//! Prometheus metrics for pkgdoc
//!
//! This module provides observability through Prometheus-compatible metrics
//! for documentation fetches, queries, and paging sessions.

use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};
use serde::Serialize;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // Fetch metrics
    // ============================================================================

    /// Total number of documentation page fetches
    pub static ref FETCH_REQUESTS: Counter = Counter::with_opts(
        Opts::new(
            "pkgdoc_fetch_requests_total",
            "Total number of documentation page fetches"
        )
    ).expect("Failed to create FETCH_REQUESTS counter");

    /// Fetches that failed before a body was read
    pub static ref FETCH_ERRORS: Counter = Counter::with_opts(
        Opts::new(
            "pkgdoc_fetch_errors_total",
            "Total number of failed documentation page fetches"
        )
    ).expect("Failed to create FETCH_ERRORS counter");

    /// Fetch latency in seconds
    pub static ref FETCH_LATENCY: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "pkgdoc_fetch_latency_seconds",
            "Documentation page fetch latency in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0])
    ).expect("Failed to create FETCH_LATENCY histogram");

    /// Lookups served from the documentation cache
    pub static ref DOC_CACHE_HITS: Counter = Counter::with_opts(
        Opts::new(
            "pkgdoc_doc_cache_hits_total",
            "Total number of documentation cache hits"
        )
    ).expect("Failed to create DOC_CACHE_HITS counter");

    // ============================================================================
    // Query metrics
    // ============================================================================

    /// Total number of answered queries, found or not
    pub static ref QUERIES: Counter = Counter::with_opts(
        Opts::new(
            "pkgdoc_queries_total",
            "Total number of documentation queries"
        )
    ).expect("Failed to create QUERIES counter");

    // ============================================================================
    // Paging metrics
    // ============================================================================

    /// Currently open paging sessions
    pub static ref PAGE_SESSIONS_ACTIVE: Gauge = Gauge::with_opts(
        Opts::new(
            "pkgdoc_page_sessions_active",
            "Number of open paging sessions"
        )
    ).expect("Failed to create PAGE_SESSIONS_ACTIVE gauge");

    /// Sessions removed by the idle sweep
    pub static ref PAGE_SESSIONS_EXPIRED: Counter = Counter::with_opts(
        Opts::new(
            "pkgdoc_page_sessions_expired_total",
            "Total number of paging sessions expired by the idle sweep"
        )
    ).expect("Failed to create PAGE_SESSIONS_EXPIRED counter");
}

/// Register all metrics with the global registry
///
/// This function should be called once at application startup.
/// Panics if metrics registration fails.
pub fn register_metrics() {
    REGISTRY
        .register(Box::new(FETCH_REQUESTS.clone()))
        .expect("Failed to register FETCH_REQUESTS");
    REGISTRY
        .register(Box::new(FETCH_ERRORS.clone()))
        .expect("Failed to register FETCH_ERRORS");
    REGISTRY
        .register(Box::new(FETCH_LATENCY.clone()))
        .expect("Failed to register FETCH_LATENCY");
    REGISTRY
        .register(Box::new(DOC_CACHE_HITS.clone()))
        .expect("Failed to register DOC_CACHE_HITS");
    REGISTRY
        .register(Box::new(QUERIES.clone()))
        .expect("Failed to register QUERIES");
    REGISTRY
        .register(Box::new(PAGE_SESSIONS_ACTIVE.clone()))
        .expect("Failed to register PAGE_SESSIONS_ACTIVE");
    REGISTRY
        .register(Box::new(PAGE_SESSIONS_EXPIRED.clone()))
        .expect("Failed to register PAGE_SESSIONS_EXPIRED");
}

/// Gather all metrics and encode them in Prometheus text format
///
/// Returns an empty string if encoding fails.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Metrics contained invalid UTF-8: {}", e);
        String::new()
    })
}

/// Current metric values, reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MetricSnapshot {
    pub fetch_requests_total: f64,
    pub fetch_errors_total: f64,
    pub fetch_latency_avg: f64,
    pub doc_cache_hits_total: f64,
    pub queries_total: f64,
    pub page_sessions_active: f64,
    pub page_sessions_expired_total: f64,
}

impl MetricSnapshot {
    /// Capture the current state of all metrics
    pub fn capture() -> Self {
        Self {
            fetch_requests_total: FETCH_REQUESTS.get(),
            fetch_errors_total: FETCH_ERRORS.get(),
            fetch_latency_avg: calculate_histogram_avg(&FETCH_LATENCY),
            doc_cache_hits_total: DOC_CACHE_HITS.get(),
            queries_total: QUERIES.get(),
            page_sessions_active: PAGE_SESSIONS_ACTIVE.get(),
            page_sessions_expired_total: PAGE_SESSIONS_EXPIRED.get(),
        }
    }
}

/// Calculate the average value from a histogram
fn calculate_histogram_avg(histogram: &Histogram) -> f64 {
    let count = histogram.get_sample_count();
    if count == 0 {
        return 0.0;
    }
    histogram.get_sample_sum() / count as f64
}
