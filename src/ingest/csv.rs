//! Tabular import and export of visit records.
//!
//! The wire format is the fixture format of the surrounding system: a header
//! row `name,address,coordinate,start,end,priority`, one visit per row, with
//! times either `HH:MM` or raw minutes since midnight. Rows that fail
//! validation are skipped and reported with their row number; they are never
//! coerced into a placeholder record, and they do not fail the batch.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Visit;

/// Batch-level import failure: the input itself could not be read. Row-level
/// problems are not errors; they are reported in the [`ImportReport`].
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot process CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One rejected input row and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    pub reason: String,
}

/// Outcome of one bulk ingestion: the valid records plus an account of every
/// row that was skipped and why.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub visits: Vec<Visit>,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    coordinate: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
    #[serde(default)]
    priority: String,
}

/// Parse visit records out of CSV text.
///
/// Returns `Err` only when the underlying reader fails; malformed rows
/// (wrong field count, unparsable times, inverted windows) land in
/// `skipped` with their row number and the valid rows still proceed.
pub fn import_visits<R: io::Read>(reader: R) -> Result<ImportReport, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = ImportReport::default();
    for (idx, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = idx + 1;
        match record {
            Ok(raw) => match Visit::from_fields(
                &raw.name,
                &raw.address,
                &raw.coordinate,
                &raw.start,
                &raw.end,
                &raw.priority,
            ) {
                Ok(visit) => report.visits.push(visit),
                Err(e) => report.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                }),
            },
            Err(e) => {
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    return Err(ImportError::Csv(e));
                }
                report.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

/// Serialize visits back to the import format, windows as raw minute counts.
pub fn export_visits<W: io::Write>(visits: &[Visit], writer: W) -> Result<(), ImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["name", "address", "coordinate", "start", "end", "priority"])?;
    for visit in visits {
        let start = visit.window.start.value().to_string();
        let end = visit.window.end.value().to_string();
        let priority = visit.priority.to_string();
        csv_writer.write_record([
            visit.name.as_str(),
            visit.location.address.as_str(),
            visit.location.coordinate.as_str(),
            start.as_str(),
            end.as_str(),
            priority.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
