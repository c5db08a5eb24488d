//! Storage port: the booking store contract.

use std::future::Future;

use stayease_domain::booking::Booking;
use stayease_domain::error::StayEaseError;

/// Which bookings a recency scan considers.
///
/// Cancelled bookings are excluded in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentKind {
    /// Every active booking.
    All,
    /// Only active bookings with a positive `total_paid`.
    Paid,
}

/// Result of [`BookingRepository::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many records were inserted.
    Seeded(usize),
    /// The store already held data; nothing was written.
    AlreadyPopulated,
}

/// Read-mostly access to booking records.
///
/// Implementations exist for a local `SQLite` file and for a document collection.
pub trait BookingRepository {
    /// First booking whose trimmed email equals the trimmed `email` (case-sensitive).
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Booking>, StayEaseError>> + Send;

    /// First booking with exactly this `name`, cancelled or not.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Booking>, StayEaseError>> + Send;

    /// Up to `limit` non-cancelled bookings, newest first.
    ///
    /// "Newest" is insertion or identifier order, not a date comparison.
    fn list_recent(
        &self,
        limit: usize,
        kind: RecentKind,
    ) -> impl Future<Output = Result<Vec<Booking>, StayEaseError>> + Send;

    /// All non-cancelled bookings with exactly this `name`, in no particular order.
    fn list_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Booking>, StayEaseError>> + Send;

    /// Insert `bookings` only if the store holds no records at all.
    fn seed_if_empty(
        &self,
        bookings: Vec<Booking>,
    ) -> impl Future<Output = Result<SeedOutcome, StayEaseError>> + Send;
}
