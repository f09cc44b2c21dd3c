//! Server configuration loaded from environment variables.

use std::env;

use crate::ingest::listing::ListingConfig;

/// Runtime configuration for the HTTP server and the listing client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
    /// Listing API client settings
    pub listing: ListingConfig,
}

impl Config {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `LISTING_API_BASE` (optional): base URL of the listing service
    /// - `LISTING_TIMEOUT_SECS` (optional, default: 10): lookup timeout
    ///
    /// # Errors
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => 8080,
        };

        let mut listing = ListingConfig::default();
        if let Ok(base) = env::var("LISTING_API_BASE") {
            listing.base_url = base;
        }
        if let Ok(raw) = env::var("LISTING_TIMEOUT_SECS") {
            listing.timeout_secs = raw
                .parse()
                .map_err(|_| "LISTING_TIMEOUT_SECS must be a whole number".to_string())?;
        }

        Ok(Self {
            host,
            port,
            listing,
        })
    }
}
