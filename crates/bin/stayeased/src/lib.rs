//! # stayeased
//!
//! Composition root shared by the `stayeased` server and the
//! `stayease-import` tool.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize tracing
//! - Bootstrap the booking store before traffic is accepted
//! - Wire repositories, services and the axum router together
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

pub mod bootstrap;
pub mod config;
pub mod server;
pub mod telemetry;
