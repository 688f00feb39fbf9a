//! Database model for the sync run log.

use diesel::prelude::*;
use log::warn;

use salesboard_core::sync::{SyncCounters, SyncRun, SyncRunStatus, SyncType};

use crate::utils::{text_to_opt_timestamp, text_to_timestamp, timestamp_to_text};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::sync_runs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct SyncRunDB {
    pub id: String,
    pub sync_type: String,
    pub status: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub records_processed: i64,
    pub records_created: i64,
    pub records_updated: i64,
    pub error_message: Option<String>,
    pub last_modification_timestamp: Option<String>,
}

fn count_to_db(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn count_from_db(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl From<&SyncRun> for SyncRunDB {
    fn from(run: &SyncRun) -> Self {
        Self {
            id: run.id.clone(),
            sync_type: run.sync_type.as_str().to_string(),
            status: run.status.as_str().to_string(),
            started_at: timestamp_to_text(run.started_at),
            completed_at: run.completed_at.map(timestamp_to_text),
            records_processed: count_to_db(run.counters.records_processed),
            records_created: count_to_db(run.counters.records_created),
            records_updated: count_to_db(run.counters.records_updated),
            error_message: run.error_message.clone(),
            last_modification_timestamp: run.last_modification_timestamp.map(timestamp_to_text),
        }
    }
}

impl From<SyncRunDB> for SyncRun {
    fn from(db: SyncRunDB) -> Self {
        let sync_type = db.sync_type.parse::<SyncType>().unwrap_or_else(|_| {
            warn!("Unknown sync type '{}' on run {}", db.sync_type, db.id);
            SyncType::Full
        });
        // An unreadable status is reported as failed so it never counts as a watermark.
        let status = db
            .status
            .parse::<SyncRunStatus>()
            .unwrap_or(SyncRunStatus::Failed);

        Self {
            id: db.id,
            sync_type,
            status,
            started_at: text_to_timestamp(&db.started_at),
            completed_at: text_to_opt_timestamp(db.completed_at),
            counters: SyncCounters {
                records_processed: count_from_db(db.records_processed),
                records_created: count_from_db(db.records_created),
                records_updated: count_from_db(db.records_updated),
            },
            error_message: db.error_message,
            last_modification_timestamp: text_to_opt_timestamp(db.last_modification_timestamp),
        }
    }
}
