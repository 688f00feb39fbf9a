//! Progress reporting for sync runs.

use log::info;
use serde::Serialize;

use salesboard_core::sync::{SyncCounters, SyncRun, SyncType};

/// Snapshot of a run in flight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgressPayload {
    pub run_id: String,
    pub sync_type: SyncType,
    /// Pages fetched so far (1-based once the first page arrives).
    pub current_page: usize,
    pub counters: SyncCounters,
    /// Records that failed to reconcile and were skipped.
    pub records_failed: u64,
}

/// Receives progress from the orchestrator.
///
/// The CLI logs; other front ends can forward the payloads elsewhere.
pub trait SyncProgressReporter: Send + Sync {
    fn report_progress(&self, payload: SyncProgressPayload);

    fn report_sync_start(&self, run: &SyncRun);

    /// Called once the run has been recorded as completed or failed.
    fn report_sync_complete(&self, run: &SyncRun);
}

/// Writes progress lines to the log.
#[derive(Debug, Clone, Default)]
pub struct LogProgressReporter;

impl SyncProgressReporter for LogProgressReporter {
    fn report_progress(&self, payload: SyncProgressPayload) {
        info!(
            "{} sync progress: page {}, {}, {} failed",
            payload.sync_type, payload.current_page, payload.counters, payload.records_failed
        );
    }

    fn report_sync_start(&self, run: &SyncRun) {
        info!("Started {} sync (run {})", run.sync_type, run.id);
    }

    fn report_sync_complete(&self, run: &SyncRun) {
        let took = run
            .duration()
            .map(|d| format!(" in {:.1}s", d.num_milliseconds() as f64 / 1000.0))
            .unwrap_or_default();
        info!(
            "{} sync {}{}: {}",
            run.sync_type, run.status, took, run.counters
        );
    }
}

/// A no-op progress reporter for contexts where progress reporting is not needed.
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressReporter;

impl SyncProgressReporter for NoOpProgressReporter {
    fn report_progress(&self, _payload: SyncProgressPayload) {}

    fn report_sync_start(&self, _run: &SyncRun) {}

    fn report_sync_complete(&self, _run: &SyncRun) {}
}
