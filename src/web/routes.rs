//! Route definitions for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::state::AppState;

/// Create the main router with all routes.
///
/// # Arguments
/// * `state` - The shared application state
///
/// # Returns
/// An Axum router configured with all pkgdoc endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Queries
        .route("/api/doc", post(handlers::doc))
        .route("/api/packages/{*package}", get(handlers::package_summary))
        // Paging sessions
        .route("/api/pages", post(handlers::create_page))
        .route(
            "/api/pages/{key}",
            get(handlers::show_page).delete(handlers::dismiss_page),
        )
        .route("/api/pages/{key}/next", post(handlers::next_page))
        .route("/api/pages/{key}/prev", post(handlers::prev_page))
        // Health and metrics
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
