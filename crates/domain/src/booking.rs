//! Booking: one guest stay, as recorded in the bookings dataset.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{StayEaseError, ValidationError};
use crate::id::BookingId;

/// A single booking record.
///
/// Dates are kept as the opaque strings found in the source data; they are
/// not guaranteed to share one format, so nothing here parses them.
///
/// Field names double as the table column names and the JSON document keys.
/// Missing keys decode to their defaults, which lets sparse documents load.
/// Flags decode from either booleans or the integers `0`/`1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub booking_id: BookingId,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub booking_date: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub days_stayed: i64,
    pub number_of_guests: i64,
    pub room_type: String,
    pub price_per_night: f64,
    pub promo_code: String,
    pub discount_pct: f64,
    pub subtotal: f64,
    pub total_paid: f64,
    pub payment_method: String,
    pub booking_channel: String,
    pub special_requests: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub repeat_guest: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub cancelled: bool,
    pub rating: f64,
    pub review: String,
}

impl Booking {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayEaseError::Validation`] when `booking_id` is empty.
    pub fn validate(&self) -> Result<(), StayEaseError> {
        if self.booking_id.is_empty() {
            return Err(ValidationError::EmptyBookingId.into());
        }
        Ok(())
    }

    /// Whether the stored email equals `email` once both sides are trimmed.
    ///
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim() == email.trim()
    }

    /// Whether the booking was paid for at all.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.total_paid > 0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

/// Any non-zero integer is `true`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    })
}

/// Order bookings by check-in date string, latest first.
///
/// The comparison is lexicographic, so it is only chronological for
/// formats such as `YYYY-MM-DD`. Ties keep their incoming order.
pub fn sort_by_checkin_desc(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.checkin_date.cmp(&a.checkin_date));
}
