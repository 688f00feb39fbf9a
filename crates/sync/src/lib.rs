//! Salesboard Sync - keeps the local store in step with the MLS.
//!
//! [`SyncOrchestrator`] pages through the MLS client, reconciles each record
//! into storage through [`Reconciler`] and records every attempt in the sync
//! run log so the next run can continue from the last watermark.

pub mod orchestrator;
pub mod progress;
pub mod reconciler;

pub use orchestrator::{FullSyncReport, SyncConfig, SyncMode, SyncOrchestrator};
pub use progress::{
    LogProgressReporter, NoOpProgressReporter, SyncProgressPayload, SyncProgressReporter,
};
pub use reconciler::{record_label, Reconciler};
