//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ingest::listing::ListingProvider;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Listing lookup provider for auto-import
    pub listing: Arc<dyn ListingProvider>,
}

impl AppState {
    /// Create a new application state with the given listing provider.
    pub fn new(listing: Arc<dyn ListingProvider>) -> Self {
        Self { listing }
    }
}
