//! Inspection Scheduler HTTP Server Binary
//!
//! This is the main entry point for the scheduler REST API server.
//! It initializes the listing client, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin scheduler-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `LISTING_API_BASE`: Base URL of the property-listing API
//! - `LISTING_TIMEOUT_SECS`: Listing lookup timeout (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use inspection_scheduler::config::Config;
use inspection_scheduler::http::{create_router, AppState};
use inspection_scheduler::ingest::listing::DomainClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Inspection Scheduler HTTP Server");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let listing = DomainClient::new(config.listing.clone())
        .map_err(|e| anyhow::anyhow!("failed to build listing client: {}", e))?;
    let state = AppState::new(Arc::new(listing));

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
