use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;

use salesboard_core::errors::{DatabaseError, Error};
use salesboard_core::sync::{
    SyncCounters, SyncRun, SyncRunRepositoryTrait, SyncRunStatus, SyncType,
};
use salesboard_core::Result;

use super::model::SyncRunDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sync_runs;
use crate::utils::text_to_opt_timestamp;

pub struct SyncRunRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SyncRunRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SyncRunRepository { pool, writer }
    }

    /// Loads a run, applies `finish` to it and stores the result, in one job.
    async fn finish_run<F>(&self, run_id: &str, finish: F) -> Result<SyncRun>
    where
        F: FnOnce(&mut SyncRun) -> Result<()> + Send + 'static,
    {
        let run_id = run_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SyncRun> {
                let row = sync_runs::table
                    .find(&run_id)
                    .select(SyncRunDB::as_select())
                    .first::<SyncRunDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!("Sync run {}", run_id)))
                    })?;

                let mut run = SyncRun::from(row);
                finish(&mut run)?;

                diesel::update(sync_runs::table.find(&run_id))
                    .set(&SyncRunDB::from(&run))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                debug!("Sync run {} is now {}", run.id, run.status);
                Ok(run)
            })
            .await
    }
}

#[async_trait]
impl SyncRunRepositoryTrait for SyncRunRepository {
    async fn record_start(&self, sync_type: SyncType) -> Result<SyncRun> {
        let run = SyncRun::start(sync_type);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SyncRun> {
                diesel::insert_into(sync_runs::table)
                    .values(&SyncRunDB::from(&run))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(run)
            })
            .await
    }

    async fn record_success(
        &self,
        run_id: &str,
        counters: SyncCounters,
        watermark: Option<DateTime<Utc>>,
    ) -> Result<SyncRun> {
        self.finish_run(run_id, move |run| run.complete(counters, watermark))
            .await
    }

    async fn record_failure(
        &self,
        run_id: &str,
        counters: SyncCounters,
        error: &str,
    ) -> Result<SyncRun> {
        let error = error.to_string();
        self.finish_run(run_id, move |run| run.fail(counters, error))
            .await
    }

    fn last_successful_watermark(&self, sync_type: SyncType) -> Result<Option<DateTime<Utc>>> {
        let mut conn = get_connection(&self.pool)?;
        let latest = sync_runs::table
            .filter(sync_runs::sync_type.eq(sync_type.as_str()))
            .filter(sync_runs::status.eq(SyncRunStatus::Completed.as_str()))
            .order((sync_runs::completed_at.desc(), sync_runs::started_at.desc()))
            .select(sync_runs::last_modification_timestamp)
            .first::<Option<String>>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(latest.and_then(text_to_opt_timestamp))
    }

    fn get_by_id(&self, run_id: &str) -> Result<Option<SyncRun>> {
        let mut conn = get_connection(&self.pool)?;
        let row = sync_runs::table
            .find(run_id)
            .select(SyncRunDB::as_select())
            .first::<SyncRunDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(SyncRun::from))
    }

    fn list_recent(&self, limit: i64) -> Result<Vec<SyncRun>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sync_runs::table
            .order(sync_runs::started_at.desc())
            .limit(limit.max(0))
            .select(SyncRunDB::as_select())
            .load::<SyncRunDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SyncRun::from).collect())
    }
}
