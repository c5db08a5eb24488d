//! # stayease-adapter-csv
//!
//! Reads the bookings dataset export into domain [`Booking`](stayease_domain::booking::Booking)s.
//!
//! Cells are trimmed, then coerced per column: integers, floats and
//! case-insensitive `TRUE`/`FALSE` flags. One bad cell fails the whole file,
//! so callers can insert the result atomically or not at all.
//!
//! ## Dependency rule
//! Depends on `stayease-domain` only. Writing the parsed bookings is up to
//! the caller, through a storage adapter.

mod error;
mod reader;

pub use error::CsvImportError;
pub use reader::{read_bookings, read_bookings_from_path};
