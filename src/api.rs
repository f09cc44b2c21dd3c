//! Public API surface for the inspection scheduler.
//!
//! This file consolidates the types a consumer of the crate needs: the
//! validated visit record, the chain/result DTOs, and the error taxonomy.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::time::{Minutes, ParseError};
pub use crate::models::visit::{
    Location, ValidationError, Visit, Window, DEFAULT_PRIORITY,
};
pub use crate::scheduler::{
    compute_schedule, Chain, ScheduleResult, DEFAULT_TOP_K,
};

pub use crate::ingest::csv::{
    export_visits, import_visits, ImportError, ImportReport, SkippedRow,
};
pub use crate::ingest::listing::{
    DomainClient, ListingConfig, ListingError, ListingProvider, VisitDraft,
};
