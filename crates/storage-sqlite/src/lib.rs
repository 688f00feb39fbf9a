//! SQLite storage implementation for Salesboard.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `salesboard-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for members, listings, sync runs and agent stats
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` and `sync` crates are database-agnostic and work with traits.
//!
//! ```text
//! core (domain)          sync (orchestrator)
//!       │                      │
//!       └──────────┬───────────┘
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod members;
pub mod properties;
pub mod stats;
pub mod sync_runs;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use members::MemberRepository;
pub use properties::PropertyRepository;
pub use stats::AgentStatRepository;
pub use sync_runs::SyncRunRepository;

// Re-export from salesboard-core for convenience
pub use salesboard_core::errors::{DatabaseError, Error, Result};
