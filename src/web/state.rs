//! Application state for the web server.
//!
//! This module defines the shared state that is accessible from all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::docs::DocService;
use crate::pages::PageRegistry;

/// Shared application state for the web server.
///
/// This state is cloned for each request handler, but the inner Arc types
/// ensure that the actual data is shared efficiently.
#[derive(Clone)]
pub struct AppState {
    /// Cached documentation access
    pub docs: Arc<DocService>,
    /// Open paging sessions
    pub pages: Arc<PageRegistry>,
    /// Configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state.
    pub fn new(docs: Arc<DocService>, pages: Arc<PageRegistry>, config: Config) -> Self {
        Self {
            docs,
            pages,
            config,
        }
    }
}
