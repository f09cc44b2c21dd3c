//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/schedule", post(handlers::compute_schedule))
        .route("/visits/import", post(handlers::import_visits))
        .route("/visits/export", post(handlers::export_visits))
        .route("/visits/auto-import", post(handlers::auto_import));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow sizable CSV uploads.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::listing::{DomainClient, ListingConfig};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let listing = Arc::new(DomainClient::new(ListingConfig::default()).unwrap());
        let state = AppState::new(listing);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
