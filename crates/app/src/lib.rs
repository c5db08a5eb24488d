//! # stayease-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BookingRepository`: email/name lookups, recency scans, one-time seeding
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BookingService`: login checks, dashboards, demo seeding
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `stayease-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
