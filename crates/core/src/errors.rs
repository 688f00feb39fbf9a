//! Core error types for Salesboard.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use salesboard_mls::MlsApiError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the sync pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("MLS API request failed: {0}")]
    MlsApi(#[from] MlsApiError),

    #[error("Reconciliation failed: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("Sync aborted: {0}")]
    SyncAborted(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

/// Per-record failures raised while turning an upstream record into a local row.
///
/// The orchestrator logs and skips these instead of failing the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconcileError {
    #[error("Record is missing natural key field '{0}'")]
    MissingNaturalKey(&'static str),

    #[error("Field '{field}' has an unusable value: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl Error {
    /// Configuration problems are fatal before any network or storage work.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingConfigKey(_)
                | Error::InvalidConfigValue(_)
                | Error::MlsApi(MlsApiError::MissingCredential)
                | Error::MlsApi(MlsApiError::InvalidConfig(_))
        )
    }

    /// Errors confined to a single upstream record.
    ///
    /// The orchestrator skips the record and keeps going. Anything else from
    /// the reconciler means storage itself is unavailable and ends the run.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            Error::Reconcile(_)
                | Error::Validation(_)
                | Error::Database(DatabaseError::UniqueViolation(_))
                | Error::Database(DatabaseError::ForeignKeyViolation(_))
        )
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
