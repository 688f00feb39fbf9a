//! Salesboard Core - Domain entities, services, and traits.
//!
//! This crate contains the domain model of the MLS sync pipeline: field
//! mapping, members, properties, the sync-run (watermark) log and the agent
//! ranking engine. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod mapping;
pub mod members;
pub mod properties;
pub mod stats;
pub mod sync;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
