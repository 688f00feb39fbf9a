//! Watermark store contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::sync_run_model::{SyncCounters, SyncRun, SyncType};
use crate::errors::Result;

/// Durable log of sync attempts.
///
/// Every write is its own immediately-committed transaction so that a crashed
/// run stays visible as `started`.
#[async_trait]
pub trait SyncRunRepositoryTrait: Send + Sync {
    /// Creates a run in `started` state and returns it.
    async fn record_start(&self, sync_type: SyncType) -> Result<SyncRun>;

    /// Moves a started run to `completed`, storing its counters and watermark.
    async fn record_success(
        &self,
        run_id: &str,
        counters: SyncCounters,
        watermark: Option<DateTime<Utc>>,
    ) -> Result<SyncRun>;

    /// Moves a started run to `failed`, keeping the counters accumulated so far.
    async fn record_failure(
        &self,
        run_id: &str,
        counters: SyncCounters,
        error: &str,
    ) -> Result<SyncRun>;

    /// Watermark of the most recently completed run of this type, by
    /// `completed_at`. `None` means the next run must be a full sync.
    fn last_successful_watermark(&self, sync_type: SyncType) -> Result<Option<DateTime<Utc>>>;

    fn get_by_id(&self, run_id: &str) -> Result<Option<SyncRun>>;

    /// Most recent runs first, by `started_at`.
    fn list_recent(&self, limit: i64) -> Result<Vec<SyncRun>>;
}
