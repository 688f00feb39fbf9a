//! Error types for the MLS API client.

use thiserror::Error;

/// Errors that can occur while talking to the MLS RESO Web API.
#[derive(Error, Debug)]
pub enum MlsApiError {
    /// No bearer credential was supplied when building the client.
    #[error("MLS bearer token is not configured")]
    MissingCredential,

    /// The API answered with HTTP 429.
    #[error("Rate limited by MLS API while fetching {resource}")]
    RateLimited {
        /// The OData resource being fetched
        resource: String,
    },

    /// The API rate limited the same page again after the cool-down retry.
    #[error("Rate limit persisted for {resource} after waiting {cooldown_secs}s and retrying once")]
    RateLimitExceeded {
        resource: String,
        cooldown_secs: u64,
    },

    /// The credential was rejected (HTTP 401/403).
    #[error("MLS API rejected the bearer token (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-success HTTP status.
    #[error("MLS API error {status}: {message}")]
    Http { status: u16, message: String },

    /// The request did not complete within the configured timeout.
    #[error("MLS API request timed out: {0}")]
    Timeout(String),

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected OData envelope.
    #[error("Failed to decode MLS API response: {0}")]
    Decode(String),

    /// A continuation link pointed outside the configured API.
    #[error("Invalid pagination cursor: {0}")]
    InvalidCursor(String),

    /// The client could not be constructed.
    #[error("Invalid MLS client configuration: {0}")]
    InvalidConfig(String),
}

impl MlsApiError {
    /// Whether this error is the upstream rate-limit signal that warrants a
    /// single cool-down retry.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
