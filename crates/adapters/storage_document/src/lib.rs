//! # stayease-adapter-storage-document
//!
//! Document-collection persistence adapter.
//!
//! Bookings are stored as schemaless JSON documents in a named collection,
//! the way a hosted document database would hold them. The collection lives
//! in memory and can be mirrored to a JSON file so seeded data survives restarts.
//!
//! ## Dependency rule
//! Depends on `stayease-app` (for port traits) and `stayease-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod booking_repo;
mod collection;
mod error;

pub use booking_repo::{BOOKINGS_COLLECTION, DocumentBookingRepository};
pub use collection::{Document, DocumentCollection};
pub use error::DocumentStoreError;
