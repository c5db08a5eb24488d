//! # stayease-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the booking store port defined in `stayease-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Execute one-off setup scripts and bulk imports transactionally
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `stayease-app` (for port traits) and `stayease-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod booking_repo;
mod error;
mod pool;

pub use booking_repo::SqliteBookingRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
