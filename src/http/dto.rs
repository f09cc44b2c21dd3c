//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Core result types are re-exported since they already derive
//! Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::ingest::csv::SkippedRow;
pub use crate::ingest::listing::VisitDraft;
pub use crate::models::Visit;
pub use crate::scheduler::{Chain, ScheduleResult};

/// One visit as submitted by a client. Times are wall-clock strings
/// (`HH:MM` or raw minutes) and are normalized server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitPayload {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coordinate: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub priority: i32,
}

/// Request body for computing a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Candidate visits; must be non-empty
    pub visits: Vec<VisitPayload>,
    /// Fixed per-visit duration in minutes; must be positive
    pub duration_minutes: i32,
    /// How many chains to return (default: 3)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    crate::scheduler::DEFAULT_TOP_K
}

/// Request body for exporting visits as CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub visits: Vec<VisitPayload>,
}

/// Response for a CSV import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Number of rows turned into visit records
    pub imported: usize,
    /// Number of rows skipped
    pub skipped: usize,
    /// The imported records
    pub visits: Vec<Visit>,
    /// Row-by-row account of what was skipped and why
    pub errors: Vec<SkippedRow>,
}

/// Request body for auto-import from a listing URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoImportRequest {
    pub url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
