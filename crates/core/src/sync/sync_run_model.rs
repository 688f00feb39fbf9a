//! Sync run (watermark log) domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// What a sync run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Members,
    Properties,
    /// Members, then properties, then agent rankings.
    Full,
}

impl SyncType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::Members => "members",
            SyncType::Properties => "properties",
            SyncType::Full => "full",
        }
    }
}

impl fmt::Display for SyncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "members" => Ok(SyncType::Members),
            "properties" => Ok(SyncType::Properties),
            "full" => Ok(SyncType::Full),
            other => Err(ValidationError::InvalidInput(format!("Unknown sync type '{}'", other)).into()),
        }
    }
}

/// Lifecycle of a run: `Started` moves to exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncRunStatus {
    #[default]
    Started,
    Completed,
    Failed,
}

impl SyncRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncRunStatus::Started => "started",
            SyncRunStatus::Completed => "completed",
            SyncRunStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SyncRunStatus::Started)
    }
}

impl fmt::Display for SyncRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncRunStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "started" => Ok(SyncRunStatus::Started),
            "completed" => Ok(SyncRunStatus::Completed),
            "failed" => Ok(SyncRunStatus::Failed),
            other => Err(ValidationError::InvalidInput(format!("Unknown sync status '{}'", other)).into()),
        }
    }
}

/// Per-run counters.
///
/// `records_processed` counts every fetched record, including records skipped
/// by the incremental floor and records whose reconciliation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCounters {
    pub records_processed: u64,
    pub records_created: u64,
    pub records_updated: u64,
}

impl SyncCounters {
    pub fn record_outcome(&mut self, outcome: &UpsertOutcome) {
        if outcome.created {
            self.records_created += 1;
        } else {
            self.records_updated += 1;
        }
    }

    /// Records that were reconciled, as opposed to merely fetched.
    pub fn reconciled(&self) -> u64 {
        self.records_created + self.records_updated
    }
}

impl std::ops::Add for SyncCounters {
    type Output = SyncCounters;

    fn add(self, rhs: SyncCounters) -> SyncCounters {
        SyncCounters {
            records_processed: self.records_processed + rhs.records_processed,
            records_created: self.records_created + rhs.records_created,
            records_updated: self.records_updated + rhs.records_updated,
        }
    }
}

impl fmt::Display for SyncCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed, {} created, {} updated",
            self.records_processed, self.records_created, self.records_updated
        )
    }
}

/// Local row id produced by a create-or-update, and which of the two happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub id: String,
    pub created: bool,
}

impl UpsertOutcome {
    pub fn created(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created: true,
        }
    }

    pub fn updated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created: false,
        }
    }
}

/// One sync invocation as recorded in the watermark log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRun {
    pub id: String,
    pub sync_type: SyncType,
    pub status: SyncRunStatus,
    pub started_at: DateTime<Utc>,
    /// Set exactly when the run reaches a terminal status.
    pub completed_at: Option<DateTime<Utc>>,
    pub counters: SyncCounters,
    /// Only set on failure.
    pub error_message: Option<String>,
    /// Highest upstream modification timestamp seen; next run's lower bound.
    pub last_modification_timestamp: Option<DateTime<Utc>>,
}

impl SyncRun {
    /// A new run in `Started` state.
    pub fn start(sync_type: SyncType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sync_type,
            status: SyncRunStatus::Started,
            started_at: Utc::now(),
            completed_at: None,
            counters: SyncCounters::default(),
            error_message: None,
            last_modification_timestamp: None,
        }
    }

    /// Marks the run completed with its final counters and watermark.
    pub fn complete(
        &mut self,
        counters: SyncCounters,
        watermark: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.ensure_open()?;
        self.status = SyncRunStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.counters = counters;
        self.last_modification_timestamp = watermark;
        Ok(())
    }

    /// Marks the run failed. Counters accumulated so far are kept.
    pub fn fail(&mut self, counters: SyncCounters, error: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.status = SyncRunStatus::Failed;
        self.completed_at = Some(Utc::now());
        self.counters = counters;
        self.error_message = Some(error.into());
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Wall-clock time of a finished run.
    pub fn duration(&self) -> Option<Duration> {
        self.completed_at.map(|done| done - self.started_at)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_terminal() {
            return Err(ValidationError::InvalidInput(format!(
                "Sync run {} is already {}",
                self.id, self.status
            ))
            .into());
        }
        Ok(())
    }
}

/// Watermark to store for a successful run.
///
/// Never lower than the previous successful watermark, so a run that only sees
/// older records cannot move the incremental window backwards.
pub fn next_watermark(
    observed: Option<DateTime<Utc>>,
    previous: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match (observed, previous) {
        (Some(o), Some(p)) => Some(o.max(p)),
        (o, p) => o.or(p),
    }
}
