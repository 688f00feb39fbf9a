//! Salesboard MLS client
//!
//! Fetches raw Member and Property records from the WFRMLS RESO Web API.
//!
//! ```text
//! SyncOrchestrator ──> RateLimitedClient ──> WfrmlsClient ──> RESO Web API
//!                      (pacing, one 429      (bearer auth,
//!                       cool-down retry)      OData paging)
//! ```
//!
//! Records are handed out untyped ([`ExternalRecord`]); mapping them onto the
//! local schema is the reconciler's job.

pub mod client;
pub mod errors;
pub mod models;
pub mod retry;

pub use client::{
    build_listing_url, MlsApiClient, MlsClientConfig, WfrmlsClient, DEFAULT_API_URL,
    DEFAULT_PAGE_SIZE,
};
pub use errors::MlsApiError;
pub use models::{
    year_bounds, EntityType, ExternalRecord, PageCursor, RecordFilter, RecordPage,
};
pub use retry::{RateLimitedClient, RetryPolicy};
