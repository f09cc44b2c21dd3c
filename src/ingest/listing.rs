//! Third-party property-listing lookup.
//!
//! Maps a listing URL onto a visit *draft*: name and address filled from the
//! listing service, time window left empty for manual completion, priority
//! set to the default sentinel. A draft only becomes a visit record once the
//! window is supplied and the whole thing passes validation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DEFAULT_PRIORITY;

/// Error raised by the listing lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("not a recognizable listing URL: '{0}'")]
    InvalidUrl(String),
    #[error("listing service request failed: {0}")]
    Request(String),
    #[error("listing response is missing '{0}'")]
    MalformedResponse(&'static str),
}

/// A partially filled visit, as returned by auto-import. Times are empty
/// strings until the user supplies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitDraft {
    pub name: String,
    pub address: String,
    pub coordinate: String,
    pub start: String,
    pub end: String,
    pub priority: i32,
}

/// Supplier of visit drafts from listing URLs. Object-safe so the HTTP
/// layer can hold a `dyn` provider and tests can substitute a stub.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    async fn lookup(&self, url: &str) -> Result<VisitDraft, ListingError>;
}

/// Configuration for the Domain listing API client.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.domain.com.au".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the Domain listing API.
#[derive(Debug, Clone)]
pub struct DomainClient {
    config: ListingConfig,
    client: reqwest::Client,
}

impl DomainClient {
    pub fn new(config: ListingConfig) -> Result<Self, ListingError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ListingError::Request(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl ListingProvider for DomainClient {
    async fn lookup(&self, url: &str) -> Result<VisitDraft, ListingError> {
        let id = listing_id_from_url(url)
            .ok_or_else(|| ListingError::InvalidUrl(url.to_string()))?;

        let endpoint = format!("{}/v1/listings/{}", self.config.base_url, id);
        let response: ListingResponse = self
            .client
            .get(&endpoint)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ListingError::Request(e.to_string()))?
            .json()
            .await
            .map_err(|e| ListingError::Request(e.to_string()))?;

        draft_from_response(response)
    }
}

/// Listing URLs end in a numeric listing id, e.g.
/// `https://www.domain.com.au/123-example-st-suburb-nsw-2000-2016847782`.
fn listing_id_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?.trim_end_matches('/');
    let tail = path.rsplit(['-', '/']).next()?;
    if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
        Some(tail)
    } else {
        None
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingResponse {
    #[serde(default)]
    headline: String,
    #[serde(default)]
    address_parts: Option<AddressParts>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressParts {
    #[serde(default)]
    display_address: String,
    #[serde(default)]
    unit_number: String,
    #[serde(default)]
    street_number: String,
    #[serde(default)]
    street: String,
    #[serde(default)]
    suburb: String,
    #[serde(default)]
    state_abbreviation: String,
    #[serde(default)]
    postcode: String,
}

impl AddressParts {
    fn to_address(&self) -> String {
        if !self.display_address.is_empty() {
            return self.display_address.clone();
        }
        let mut parts: Vec<&str> = Vec::new();
        for part in [
            &self.unit_number,
            &self.street_number,
            &self.street,
            &self.suburb,
            &self.state_abbreviation,
            &self.postcode,
        ] {
            if !part.is_empty() {
                parts.push(part);
            }
        }
        parts.join(" ")
    }
}

fn draft_from_response(response: ListingResponse) -> Result<VisitDraft, ListingError> {
    let address = response
        .address_parts
        .as_ref()
        .map(AddressParts::to_address)
        .unwrap_or_default();
    if address.is_empty() {
        return Err(ListingError::MalformedResponse("addressParts"));
    }

    let name = if response.headline.is_empty() {
        address.clone()
    } else {
        response.headline
    };

    Ok(VisitDraft {
        name,
        address,
        coordinate: String::new(),
        start: String::new(),
        end: String::new(),
        priority: DEFAULT_PRIORITY,
    })
}
