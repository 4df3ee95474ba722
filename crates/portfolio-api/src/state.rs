//! Shared application state.

use std::sync::Arc;

use portfolio_content::domain::catalog::ContentCatalog;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The immutable content catalog loaded at startup.
    pub catalog: Arc<ContentCatalog>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }
}
