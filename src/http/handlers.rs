//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the core
//! scheduling and ingestion modules for business logic.

use axum::{
    extract::State,
    http::header::{self, HeaderName},
    Json,
};
use tracing::debug;

use super::dto::{
    AutoImportRequest, ExportRequest, HealthResponse, ImportResponse, ScheduleRequest,
    VisitDraft, VisitPayload,
};
use super::error::AppError;
use super::state::AppState;
use crate::ingest;
use crate::models::{Location, Minutes, ValidationError, Visit, Window};
use crate::scheduler::{self, ScheduleResult};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /v1/schedule
///
/// Validate the submitted visits and return the best feasible chains.
pub async fn compute_schedule(
    State(_state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> HandlerResult<ScheduleResult> {
    let visits = validate_payload_visits(&request.visits)?;

    debug!(
        visits = visits.len(),
        duration = request.duration_minutes,
        top_k = request.top_k,
        "computing schedule"
    );

    let result = scheduler::compute_schedule(&visits, request.duration_minutes, request.top_k)?;
    Ok(Json(result))
}

fn validate_payload_visits(payloads: &[VisitPayload]) -> Result<Vec<Visit>, AppError> {
    let mut visits = Vec::with_capacity(payloads.len());
    for (idx, payload) in payloads.iter().enumerate() {
        let visit = build_visit(payload)
            .map_err(|e| AppError::BadRequest(format!("visit {}: {}", idx + 1, e)))?;
        visits.push(visit);
    }
    Ok(visits)
}

fn build_visit(payload: &VisitPayload) -> Result<Visit, ValidationError> {
    let window = Window::new(
        Minutes::parse("start", &payload.start)?,
        Minutes::parse("end", &payload.end)?,
    )?;
    Visit::new(
        payload.name.clone(),
        Location::new(payload.address.clone(), payload.coordinate.clone()),
        window,
        payload.priority,
    )
}

/// POST /v1/visits/import
///
/// Parse a CSV body into visit records, reporting skipped rows.
pub async fn import_visits(body: String) -> HandlerResult<ImportResponse> {
    let report = ingest::csv::import_visits(body.as_bytes())?;

    debug!(
        imported = report.visits.len(),
        skipped = report.skipped.len(),
        "csv import finished"
    );

    Ok(Json(ImportResponse {
        imported: report.visits.len(),
        skipped: report.skipped.len(),
        visits: report.visits,
        errors: report.skipped,
    }))
}

/// POST /v1/visits/export
///
/// Serialize submitted visits back to the CSV import format.
pub async fn export_visits(
    State(_state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<([(HeaderName, &'static str); 1], String), AppError> {
    let visits = validate_payload_visits(&request.visits)?;

    let mut out = Vec::new();
    ingest::csv::export_visits(&visits, &mut out)?;
    let body = String::from_utf8(out)
        .map_err(|e| AppError::Internal(format!("CSV output was not UTF-8: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], body))
}

/// POST /v1/visits/auto-import
///
/// Look up a listing URL and return a visit draft with an empty window.
pub async fn auto_import(
    State(state): State<AppState>,
    Json(request): Json<AutoImportRequest>,
) -> HandlerResult<VisitDraft> {
    if request.url.trim().is_empty() {
        return Err(AppError::BadRequest("field 'url' is required".to_string()));
    }

    let draft = state.listing.lookup(&request.url).await?;
    debug!(name = %draft.name, "listing auto-import succeeded");
    Ok(Json(draft))
}
