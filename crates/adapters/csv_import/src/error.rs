//! CSV import error types.

use std::path::PathBuf;

/// Errors raised while reading the bookings CSV.
///
/// Any of them aborts the whole import.
#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    /// The file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed CSV, or a required column is missing.
    #[error("malformed csv")]
    Csv(#[from] csv::Error),

    /// A cell could not be coerced into its column's type.
    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// A row has no booking identifier.
    #[error("line {line}: booking_id must not be empty")]
    EmptyBookingId { line: u64 },
}
