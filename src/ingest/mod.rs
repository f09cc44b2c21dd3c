//! Ingestion surfaces that turn outside data into visit records.
//!
//! The scheduling core only consumes validated [`crate::models::Visit`]
//! values; everything here is boundary glue. Each source reports its own
//! failures: CSV import accounts for skipped rows, the listing lookup fails
//! with an attributable [`listing::ListingError`].

pub mod csv;
pub mod listing;

pub use csv::{export_visits, import_visits, ImportReport};
pub use listing::{DomainClient, ListingProvider};
