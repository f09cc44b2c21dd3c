//! # Inspection Scheduler
//!
//! Backend for planning site-inspection visits. Each visit has a location,
//! a permitted time window, and a priority; given a fixed per-visit
//! duration, the engine enumerates every feasible back-to-back sequence
//! ("chain") of visits and surfaces the longest ones. The crate exposes the
//! core as a library and, behind the `http-server` feature, as a REST API
//! via Axum.
//!
//! ## Features
//!
//! - **Time Handling**: wall-clock (`HH:MM`) normalization into minutes
//!   since midnight
//! - **Validation**: visit records are checked at the boundary; the search
//!   core never sees malformed input
//! - **Chain Enumeration**: exhaustive earliest-deadline-first backtracking
//!   over the visit set
//! - **Ranking**: top-K selection by chain length
//! - **Ingestion**: CSV import/export and third-party listing auto-import
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated public surface for library consumers
//! - [`models`]: time normalization and visit-record validation
//! - [`scheduler`]: chain enumeration and ranking (the core)
//! - [`ingest`]: CSV and listing-lookup boundary glue
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod ingest;
pub mod models;
pub mod scheduler;

#[cfg(feature = "http-server")]
pub mod http;
