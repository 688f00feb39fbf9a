//! Tests for sync run domain models.

use super::*;
use chrono::{Duration, TimeZone, Utc};

mod sync_run_tests {
    use super::*;

    #[test]
    fn test_new_run_is_started() {
        let run = SyncRun::start(SyncType::Members);

        assert!(!run.id.is_empty());
        assert_eq!(run.sync_type, SyncType::Members);
        assert_eq!(run.status, SyncRunStatus::Started);
        assert!(run.completed_at.is_none());
        assert!(run.error_message.is_none());
        assert_eq!(run.counters, SyncCounters::default());
        assert!(run.duration().is_none());
    }

    #[test]
    fn test_complete_sets_terminal_fields() {
        let mut run = SyncRun::start(SyncType::Properties);
        let watermark = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let counters = SyncCounters {
            records_processed: 5,
            records_created: 3,
            records_updated: 1,
        };

        run.complete(counters, Some(watermark)).unwrap();

        assert_eq!(run.status, SyncRunStatus::Completed);
        assert!(run.completed_at.is_some());
        assert_eq!(run.counters, counters);
        assert_eq!(run.last_modification_timestamp, Some(watermark));
        assert!(run.error_message.is_none());
        assert!(run.duration().unwrap() >= Duration::zero());
    }

    #[test]
    fn test_fail_keeps_partial_counters() {
        let mut run = SyncRun::start(SyncType::Properties);
        let partial = SyncCounters {
            records_processed: 200,
            records_created: 150,
            records_updated: 50,
        };

        run.fail(partial, "Rate limit exceeded").unwrap();

        assert_eq!(run.status, SyncRunStatus::Failed);
        assert!(run.completed_at.is_some());
        assert_eq!(run.counters, partial);
        assert_eq!(run.error_message.as_deref(), Some("Rate limit exceeded"));
    }

    #[test]
    fn test_terminal_run_cannot_change_again() {
        let mut run = SyncRun::start(SyncType::Members);
        run.complete(SyncCounters::default(), None).unwrap();

        assert!(run.fail(SyncCounters::default(), "late").is_err());
        assert!(run.complete(SyncCounters::default(), None).is_err());
        assert_eq!(run.status, SyncRunStatus::Completed);
    }
}

mod enum_tests {
    use super::*;

    #[test]
    fn test_sync_type_text_round_trip() {
        for t in [SyncType::Members, SyncType::Properties, SyncType::Full] {
            assert_eq!(t.as_str().parse::<SyncType>().unwrap(), t);
        }
        assert!("everything".parse::<SyncType>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SyncRunStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(serde_json::to_string(&SyncType::Full).unwrap(), "\"full\"");
    }
}

mod counters_tests {
    use super::*;

    #[test]
    fn test_outcomes_are_classified() {
        let mut counters = SyncCounters::default();
        counters.record_outcome(&UpsertOutcome::created("a"));
        counters.record_outcome(&UpsertOutcome::updated("b"));
        counters.record_outcome(&UpsertOutcome::updated("c"));

        assert_eq!(counters.records_created, 1);
        assert_eq!(counters.records_updated, 2);
        assert_eq!(counters.reconciled(), 3);
    }

    #[test]
    fn test_counters_add() {
        let a = SyncCounters {
            records_processed: 10,
            records_created: 4,
            records_updated: 5,
        };
        let b = SyncCounters {
            records_processed: 3,
            records_created: 1,
            records_updated: 2,
        };
        assert_eq!(
            a + b,
            SyncCounters {
                records_processed: 13,
                records_created: 5,
                records_updated: 7,
            }
        );
    }
}

mod watermark_tests {
    use super::*;

    #[test]
    fn test_next_watermark_never_regresses() {
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        assert_eq!(next_watermark(Some(newer), Some(older)), Some(newer));
        assert_eq!(next_watermark(Some(older), Some(newer)), Some(newer));
        assert_eq!(next_watermark(None, Some(older)), Some(older));
        assert_eq!(next_watermark(Some(older), None), Some(older));
        assert_eq!(next_watermark(None, None), None);
    }
}
