//! # stayease-domain
//!
//! Pure domain model for the stayease hotel-booking demo.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Bookings** (guest stays imported from the bookings dataset)
//! - Define the **Catalog** (fixed hotel listings offered for browsing)
//! - Define **dashboard views** derived from bookings
//! - Provide the **seed** bookings used to populate an empty store
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod booking;
pub mod dashboard;
pub mod hotel;
pub mod seed;
