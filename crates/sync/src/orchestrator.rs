//! Incremental sync orchestration.
//!
//! Drives the MLS client page by page, hands every record to the
//! [`Reconciler`] and keeps the sync run log current. A run is recorded as
//! `started` before any fetch and moved to `completed` or `failed` once it
//! ends; runs are never resumed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde::Serialize;

use salesboard_core::errors::{Error, Result};
use salesboard_core::stats::AgentStatsServiceTrait;
use salesboard_core::sync::{
    next_watermark, SyncCounters, SyncRun, SyncRunRepositoryTrait, SyncType,
};
use salesboard_core::utils::time_utils::parse_timestamp;
use salesboard_mls::{EntityType, ExternalRecord, MlsApiClient, PageCursor, RecordFilter};

use crate::progress::{SyncProgressPayload, SyncProgressReporter};
use crate::reconciler::{record_label, Reconciler};

/// Upstream field carrying a record's last modification time.
const MODIFICATION_TIMESTAMP_FIELD: &str = "ModificationTimestamp";

/// Configuration for sync operations.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Maximum number of pages to fetch per run (safety limit).
    pub max_pages: usize,
    /// Emit a progress report every this many member records.
    pub member_progress_interval: u64,
    /// Emit a progress report every this many listing records.
    pub property_progress_interval: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_pages: 10_000,
            member_progress_interval: 500,
            property_progress_interval: 100,
        }
    }
}

/// Whether a run continues from the last watermark or re-fetches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    #[default]
    Incremental,
    Full,
}

/// Outcome of [`SyncOrchestrator::run_full_sync`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSyncReport {
    pub run: SyncRun,
    pub members: SyncRun,
    pub properties: SyncRun,
    pub stats_updated: usize,
}

/// What one pass over the pages produced.
#[derive(Debug, Default)]
struct PageLoopOutcome {
    counters: SyncCounters,
    records_failed: u64,
    records_skipped: u64,
    max_modification: Option<DateTime<Utc>>,
}

/// Orchestrates MLS data synchronization.
///
/// # Example
///
/// ```ignore
/// let orchestrator = SyncOrchestrator::new(
///     client, reconciler, sync_runs, stats_service,
///     Arc::new(LogProgressReporter), SyncConfig::default(),
/// );
/// let run = orchestrator.sync_members(SyncMode::Incremental).await?;
/// ```
pub struct SyncOrchestrator<P: SyncProgressReporter> {
    client: Arc<dyn MlsApiClient>,
    reconciler: Reconciler,
    sync_runs: Arc<dyn SyncRunRepositoryTrait>,
    stats_service: Arc<dyn AgentStatsServiceTrait>,
    progress_reporter: Arc<P>,
    config: SyncConfig,
}

impl<P: SyncProgressReporter> SyncOrchestrator<P> {
    pub fn new(
        client: Arc<dyn MlsApiClient>,
        reconciler: Reconciler,
        sync_runs: Arc<dyn SyncRunRepositoryTrait>,
        stats_service: Arc<dyn AgentStatsServiceTrait>,
        progress_reporter: Arc<P>,
        config: SyncConfig,
    ) -> Self {
        Self {
            client,
            reconciler,
            sync_runs,
            stats_service,
            progress_reporter,
            config,
        }
    }

    /// Syncs active members.
    pub async fn sync_members(&self, mode: SyncMode) -> Result<SyncRun> {
        self.run_entity_sync(
            SyncType::Members,
            EntityType::Member,
            RecordFilter::active_members(),
            mode,
        )
        .await
    }

    /// Syncs listings that closed in `year`.
    pub async fn sync_properties(&self, year: i32, mode: SyncMode) -> Result<SyncRun> {
        self.run_entity_sync(
            SyncType::Properties,
            EntityType::Property,
            RecordFilter::closed_in_year(year),
            mode,
        )
        .await
    }

    /// Rebuilds agent statistics and rankings for `year`.
    pub async fn recompute_stats(&self, year: i32) -> Result<usize> {
        info!("Recomputing agent stats for {}", year);
        let updated = self.stats_service.recompute(year).await?;
        info!("Agent stats for {}: {} rows updated", year, updated);
        Ok(updated)
    }

    /// Members, then listings of `year`, then agent stats; both syncs forced full.
    ///
    /// Each step records its own run. The wrapping `full` run sums their
    /// counters and fails as soon as a step fails.
    pub async fn run_full_sync(&self, year: i32) -> Result<FullSyncReport> {
        let run = self.sync_runs.record_start(SyncType::Full).await?;
        self.progress_reporter.report_sync_start(&run);
        info!("Starting full sync for {} (run {})", year, run.id);

        let mut counters = SyncCounters::default();
        let result = self.run_full_sync_steps(year, &mut counters).await;

        match result {
            Ok((members, properties, stats_updated)) => {
                match self.sync_runs.record_success(&run.id, counters, None).await {
                    Ok(run) => {
                        self.progress_reporter.report_sync_complete(&run);
                        Ok(FullSyncReport {
                            run,
                            members,
                            properties,
                            stats_updated,
                        })
                    }
                    Err(err) => Err(self.fail_run(&run.id, counters, err).await),
                }
            }
            Err(err) => Err(self.fail_run(&run.id, counters, err).await),
        }
    }

    async fn run_full_sync_steps(
        &self,
        year: i32,
        counters: &mut SyncCounters,
    ) -> Result<(SyncRun, SyncRun, usize)> {
        let members = self.sync_members(SyncMode::Full).await?;
        *counters = *counters + members.counters;

        let properties = self.sync_properties(year, SyncMode::Full).await?;
        *counters = *counters + properties.counters;

        let stats_updated = self.recompute_stats(year).await?;
        Ok((members, properties, stats_updated))
    }

    async fn run_entity_sync(
        &self,
        sync_type: SyncType,
        entity: EntityType,
        base_filter: RecordFilter,
        mode: SyncMode,
    ) -> Result<SyncRun> {
        let run = self.sync_runs.record_start(sync_type).await?;
        self.progress_reporter.report_sync_start(&run);

        let mut outcome = PageLoopOutcome::default();
        let result = self
            .sync_entity_pages(&run, entity, base_filter, mode, &mut outcome)
            .await;

        match result {
            Ok(previous) => {
                let watermark = next_watermark(outcome.max_modification, previous);
                info!(
                    "{} sync done: {}, {} skipped as unchanged, {} failed",
                    sync_type, outcome.counters, outcome.records_skipped, outcome.records_failed
                );
                match self
                    .sync_runs
                    .record_success(&run.id, outcome.counters, watermark)
                    .await
                {
                    Ok(run) => {
                        self.progress_reporter.report_sync_complete(&run);
                        Ok(run)
                    }
                    Err(err) => Err(self.fail_run(&run.id, outcome.counters, err).await),
                }
            }
            Err(err) => Err(self.fail_run(&run.id, outcome.counters, err).await),
        }
    }

    /// Records the failure and hands back the original error.
    async fn fail_run(&self, run_id: &str, counters: SyncCounters, err: Error) -> Error {
        error!("Sync run {} failed: {}", run_id, err);
        match self
            .sync_runs
            .record_failure(run_id, counters, &err.to_string())
            .await
        {
            Ok(run) => self.progress_reporter.report_sync_complete(&run),
            Err(record_err) => {
                error!("Could not record failure of run {}: {}", run_id, record_err)
            }
        }
        err
    }

    /// Pages through `entity` and reconciles every record newer than the floor.
    ///
    /// Returns the previous successful watermark so the caller can keep the
    /// stored watermark monotonic.
    async fn sync_entity_pages(
        &self,
        run: &SyncRun,
        entity: EntityType,
        base_filter: RecordFilter,
        mode: SyncMode,
        outcome: &mut PageLoopOutcome,
    ) -> Result<Option<DateTime<Utc>>> {
        let previous = self.sync_runs.last_successful_watermark(run.sync_type)?;
        let floor = match (mode, previous) {
            (SyncMode::Incremental, Some(watermark)) => {
                info!(
                    "Incremental {} sync from {}",
                    run.sync_type,
                    watermark.to_rfc3339()
                );
                Some(watermark)
            }
            (SyncMode::Incremental, None) => {
                info!(
                    "No successful {} sync yet; running a full sync",
                    run.sync_type
                );
                None
            }
            (SyncMode::Full, _) => {
                info!("Full {} sync", run.sync_type);
                None
            }
        };

        let filter = base_filter.modified_after(floor);
        let interval = match entity {
            EntityType::Member => self.config.member_progress_interval,
            EntityType::Property => self.config.property_progress_interval,
        }
        .max(1);

        let mut cursor: Option<PageCursor> = None;
        let mut pages_fetched: usize = 0;

        loop {
            if pages_fetched >= self.config.max_pages {
                return Err(Error::SyncAborted(format!(
                    "Pagination exceeded max pages ({}). Aborting.",
                    self.config.max_pages
                )));
            }

            let page = self
                .client
                .fetch_page(entity, &filter, cursor.as_ref())
                .await?;
            pages_fetched += 1;
            debug!(
                "Fetched {} of {} requested {} records (page {})",
                page.records.len(),
                page.page_size,
                entity,
                pages_fetched
            );

            for record in &page.records {
                outcome.counters.records_processed += 1;
                self.process_record(entity, record, floor, outcome).await?;

                if outcome.counters.records_processed % interval == 0 {
                    self.progress_reporter.report_progress(SyncProgressPayload {
                        run_id: run.id.clone(),
                        sync_type: run.sync_type,
                        current_page: pages_fetched,
                        counters: outcome.counters,
                        records_failed: outcome.records_failed,
                    });
                }
            }

            if page.is_last() {
                break;
            }
            let next = page.next_cursor;
            if next.is_some() && next == cursor {
                return Err(Error::SyncAborted(format!(
                    "Pagination appears stuck (same {} page returned twice).",
                    entity
                )));
            }
            cursor = next;
        }

        Ok(previous)
    }

    async fn process_record(
        &self,
        entity: EntityType,
        record: &ExternalRecord,
        floor: Option<DateTime<Utc>>,
        outcome: &mut PageLoopOutcome,
    ) -> Result<()> {
        let modified = record
            .get(MODIFICATION_TIMESTAMP_FIELD)
            .and_then(|v| v.as_str())
            .and_then(parse_timestamp);

        // Every fetched record moves the watermark, reconciled or not.
        if let Some(ts) = modified {
            outcome.max_modification = outcome.max_modification.max(Some(ts));
        }

        if let (Some(ts), Some(floor)) = (modified, floor) {
            if ts <= floor {
                outcome.records_skipped += 1;
                return Ok(());
            }
        }

        match self.reconciler.reconcile(entity, record).await {
            Ok(result) => outcome.counters.record_outcome(&result),
            Err(err) if err.is_record_level() => {
                outcome.records_failed += 1;
                error!("Skipping {}: {}", record_label(entity, record), err);
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_config_default() {
        let config = SyncConfig::default();
        assert_eq!(config.max_pages, 10_000);
        assert_eq!(config.member_progress_interval, 500);
        assert_eq!(config.property_progress_interval, 100);
    }

    #[test]
    fn test_sync_mode_defaults_to_incremental() {
        assert_eq!(SyncMode::default(), SyncMode::Incremental);
    }
}
