//! HTTP API for documentation queries and paging sessions.
//!
//! # Example
//!
//! ```rust,ignore
//! use pkgdoc::web::WebServer;
//!
//! let server = WebServer::new(state);
//! server.start("127.0.0.1", 3000).await?;
//! ```

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// HTTP server for the documentation API.
pub struct WebServer {
    /// Shared application state
    state: AppState,
}

impl WebServer {
    /// Create a new web server with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Start the web server on the given address.
    ///
    /// This method blocks until the server is shut down.
    pub async fn start(self, host: &str, port: u16) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = routes::create_router(self.state).layer(cors);

        let listener = tokio::net::TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {}:{}", host, port))?;

        info!("Serving documentation API at http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .await
            .with_context(|| "Web server failed")?;

        Ok(())
    }
}
