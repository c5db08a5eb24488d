//! Fixed-schema bookings CSV reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use stayease_domain::booking::Booking;
use stayease_domain::id::BookingId;

use crate::error::CsvImportError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One CSV row before coercion. Every cell is kept as trimmed text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    booking_id: String,
    name: String,
    age: String,
    gender: String,
    country: String,
    email: String,
    phone: String,
    booking_date: String,
    checkin_date: String,
    checkout_date: String,
    days_stayed: String,
    number_of_guests: String,
    room_type: String,
    price_per_night: String,
    promo_code: String,
    discount_pct: String,
    subtotal: String,
    total_paid: String,
    payment_method: String,
    booking_channel: String,
    special_requests: String,
    repeat_guest: String,
    cancelled: String,
    rating: String,
    review: String,
}

struct Coercer {
    line: u64,
}

impl Coercer {
    fn invalid(&self, column: &'static str, value: String) -> CsvImportError {
        CsvImportError::InvalidField {
            line: self.line,
            column,
            value,
        }
    }

    fn integer(&self, column: &'static str, value: String) -> Result<i64, CsvImportError> {
        value.parse().map_err(|_| self.invalid(column, value))
    }

    fn real(&self, column: &'static str, value: String) -> Result<f64, CsvImportError> {
        value.parse().map_err(|_| self.invalid(column, value))
    }

}

/// Only a case-insensitive `TRUE` is set; blanks and anything else are unset.
fn flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl RawRecord {
    fn into_booking(self, line: u64) -> Result<Booking, CsvImportError> {
        if self.booking_id.is_empty() {
            return Err(CsvImportError::EmptyBookingId { line });
        }
        let c = Coercer { line };

        Ok(Booking {
            booking_id: BookingId::new(self.booking_id),
            name: self.name,
            age: c.integer("age", self.age)?,
            gender: self.gender,
            country: self.country,
            email: self.email,
            phone: self.phone,
            booking_date: self.booking_date,
            checkin_date: self.checkin_date,
            checkout_date: self.checkout_date,
            days_stayed: c.integer("days_stayed", self.days_stayed)?,
            number_of_guests: c.integer("number_of_guests", self.number_of_guests)?,
            room_type: self.room_type,
            price_per_night: c.real("price_per_night", self.price_per_night)?,
            promo_code: self.promo_code,
            discount_pct: c.real("discount_pct", self.discount_pct)?,
            subtotal: c.real("subtotal", self.subtotal)?,
            total_paid: c.real("total_paid", self.total_paid)?,
            payment_method: self.payment_method,
            booking_channel: self.booking_channel,
            special_requests: self.special_requests,
            repeat_guest: flag(&self.repeat_guest),
            cancelled: flag(&self.cancelled),
            rating: c.real("rating", self.rating)?,
            review: self.review,
        })
    }
}

/// Parse every row of a bookings CSV.
///
/// The first row must be the header. Columns are matched by name, so their
/// order does not matter and extra columns are ignored. Parsing stops at the
/// first bad row and nothing is returned for the rows before it.
///
/// # Errors
///
/// Returns [`CsvImportError`] on malformed CSV, a missing column, an empty
/// booking id or a numeric cell that does not coerce.
pub fn read_bookings<R: Read>(input: R) -> Result<Vec<Booking>, CsvImportError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches(BYTE_ORDER_MARK))
        .collect();
    reader.set_headers(headers.clone());

    let mut bookings = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, Position::line);
        let raw: RawRecord = record.deserialize(Some(&headers))?;
        bookings.push(raw.into_booking(line)?);
    }

    tracing::debug!(rows = bookings.len(), "parsed bookings csv");
    Ok(bookings)
}

/// Open `path` and parse it with [`read_bookings`].
///
/// # Errors
///
/// Returns [`CsvImportError::Open`] if the file cannot be opened, otherwise
/// whatever [`read_bookings`] reports.
pub fn read_bookings_from_path(path: &Path) -> Result<Vec<Booking>, CsvImportError> {
    let file = File::open(path).map_err(|source| CsvImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_bookings(file)
}
