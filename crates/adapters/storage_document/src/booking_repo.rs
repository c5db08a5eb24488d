//! Document-collection implementation of [`BookingRepository`].

use stayease_app::ports::{BookingRepository, RecentKind, SeedOutcome};
use stayease_domain::booking::Booking;
use stayease_domain::error::StayEaseError;

use crate::collection::{Document, DocumentCollection};
use crate::error::DocumentStoreError;

/// Name of the collection holding booking documents.
pub const BOOKINGS_COLLECTION: &str = "bookings";

fn decode(document: &Document) -> Result<Booking, DocumentStoreError> {
    Ok(serde_json::from_value(document.data.clone())?)
}

fn encode(booking: &Booking) -> Result<serde_json::Value, DocumentStoreError> {
    Ok(serde_json::to_value(booking)?)
}

/// Booking repository backed by a [`DocumentCollection`].
///
/// Every query scans the decoded documents; "newest" means most recently inserted.
pub struct DocumentBookingRepository {
    collection: DocumentCollection,
}

impl DocumentBookingRepository {
    /// Wrap an existing collection.
    #[must_use]
    pub fn new(collection: DocumentCollection) -> Self {
        Self { collection }
    }

    /// A repository over a fresh in-memory `bookings` collection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(DocumentCollection::in_memory(BOOKINGS_COLLECTION))
    }

    /// Append bookings unconditionally.
    ///
    /// # Errors
    ///
    /// Returns a storage error if encoding or persisting fails.
    pub async fn insert_all(&self, bookings: &[Booking]) -> Result<usize, StayEaseError> {
        let items = bookings
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.collection.add_all(items).await?)
    }

    async fn bookings(&self) -> Result<Vec<Booking>, StayEaseError> {
        let documents = self.collection.documents().await;
        let bookings = documents
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(bookings)
    }
}

impl BookingRepository for DocumentBookingRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Booking>, StayEaseError> {
        let bookings = self.bookings().await?;
        Ok(bookings.into_iter().find(|b| b.has_email(email)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Booking>, StayEaseError> {
        let bookings = self.bookings().await?;
        Ok(bookings.into_iter().find(|b| b.name == name))
    }

    async fn list_recent(
        &self,
        limit: usize,
        kind: RecentKind,
    ) -> Result<Vec<Booking>, StayEaseError> {
        let bookings = self.bookings().await?;
        Ok(bookings
            .into_iter()
            .rev()
            .filter(|b| !b.cancelled)
            .filter(|b| match kind {
                RecentKind::All => true,
                RecentKind::Paid => b.is_paid(),
            })
            .take(limit)
            .collect())
    }

    async fn list_by_name(&self, name: &str) -> Result<Vec<Booking>, StayEaseError> {
        let bookings = self.bookings().await?;
        Ok(bookings
            .into_iter()
            .filter(|b| b.name == name && !b.cancelled)
            .collect())
    }

    async fn seed_if_empty(&self, bookings: Vec<Booking>) -> Result<SeedOutcome, StayEaseError> {
        let items = bookings
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()?;
        let outcome = match self.collection.add_all_if_empty(items).await? {
            Some(count) => SeedOutcome::Seeded(count),
            None => SeedOutcome::AlreadyPopulated,
        };
        Ok(outcome)
    }
}
