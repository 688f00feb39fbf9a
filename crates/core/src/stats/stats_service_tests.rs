//! Tests for the aggregation engine.
//!
//! Covers bucket accumulation, the Unknown association fallback, dropping of
//! sales whose agent was never synced, and rank contiguity.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::constants::UNKNOWN_AOR;
use crate::errors::Result;
use crate::members::{Member, MemberRepositoryTrait, NewMember};
use crate::properties::{ClosedSale, NewProperty, Property, PropertyNaturalKey, PropertyRepositoryTrait};
use crate::sync::UpsertOutcome;

// =========================================================================
// Mocks
// =========================================================================

#[derive(Clone, Default)]
struct MockPropertyRepository {
    sales: Arc<Mutex<Vec<ClosedSale>>>,
}

#[async_trait]
impl PropertyRepositoryTrait for MockPropertyRepository {
    async fn upsert(&self, _new_property: NewProperty) -> Result<UpsertOutcome> {
        unimplemented!("not used by the aggregation engine")
    }

    fn get_by_natural_key(&self, _key: &PropertyNaturalKey) -> Result<Option<Property>> {
        Ok(None)
    }

    fn list_by_listing_key(&self, _listing_key_numeric: i64) -> Result<Vec<Property>> {
        Ok(Vec::new())
    }

    fn list_closed_sales(&self, _year: i32) -> Result<Vec<ClosedSale>> {
        Ok(self.sales.lock().unwrap().clone())
    }

    fn count(&self) -> Result<i64> {
        Ok(self.sales.lock().unwrap().len() as i64)
    }
}

#[derive(Clone, Default)]
struct MockMemberRepository {
    ids: Arc<Mutex<HashMap<i64, String>>>,
}

impl MockMemberRepository {
    fn with_members(keys: &[i64]) -> Self {
        let ids = keys.iter().map(|k| (*k, format!("member-{}", k))).collect();
        Self {
            ids: Arc::new(Mutex::new(ids)),
        }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MockMemberRepository {
    async fn upsert(&self, _new_member: NewMember) -> Result<UpsertOutcome> {
        unimplemented!("not used by the aggregation engine")
    }

    fn get_by_key(&self, _member_key_numeric: i64) -> Result<Option<Member>> {
        Ok(None)
    }

    fn find_ids_by_keys(&self, member_keys: &[i64]) -> Result<HashMap<i64, String>> {
        let ids = self.ids.lock().unwrap();
        Ok(member_keys
            .iter()
            .filter_map(|k| ids.get(k).map(|id| (*k, id.clone())))
            .collect())
    }

    fn count(&self) -> Result<i64> {
        Ok(self.ids.lock().unwrap().len() as i64)
    }
}

#[derive(Clone, Default)]
struct MockStatRepository {
    rows: Arc<Mutex<Vec<AgentStat>>>,
}

impl MockStatRepository {
    fn get_all(&self) -> Vec<AgentStat> {
        self.rows.lock().unwrap().clone()
    }

    fn find(&self, member_id: &str, aor: &str) -> Option<AgentStat> {
        self.get_all()
            .into_iter()
            .find(|s| s.member_id == member_id && s.aor == aor)
    }
}

fn member_key_of(member_id: &str) -> i64 {
    member_id
        .trim_start_matches("member-")
        .parse()
        .unwrap_or_default()
}

#[async_trait]
impl AgentStatRepositoryTrait for MockStatRepository {
    async fn replace_for_year(&self, year: i32, stats: Vec<NewAgentStat>) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|row| {
            row.year != year
                || stats
                    .iter()
                    .any(|s| s.member_id == row.member_id && s.aor == row.aor)
        });
        let written = stats.len();
        for stat in stats {
            let existing = rows.iter_mut().find(|row| {
                row.year == stat.year && row.member_id == stat.member_id && row.aor == stat.aor
            });
            match existing {
                Some(row) => {
                    row.listing_volume = stat.listing_volume;
                    row.buyer_volume = stat.buyer_volume;
                    row.total_volume = stat.total_volume;
                    row.listing_count = stat.listing_count;
                    row.buyer_count = stat.buyer_count;
                    row.transaction_count = stat.transaction_count;
                    row.average_price = stat.average_price;
                    row.updated_at = Utc::now();
                }
                None => {
                    let id = format!("stat-{}-{}-{}", stat.year, stat.member_id, stat.aor);
                    rows.push(AgentStat {
                        id,
                        member_key_numeric: member_key_of(&stat.member_id),
                        member_id: stat.member_id,
                        year: stat.year,
                        aor: stat.aor,
                        listing_volume: stat.listing_volume,
                        buyer_volume: stat.buyer_volume,
                        total_volume: stat.total_volume,
                        listing_count: stat.listing_count,
                        buyer_count: stat.buyer_count,
                        transaction_count: stat.transaction_count,
                        average_price: stat.average_price,
                        rank_overall: None,
                        rank_in_aor: None,
                        updated_at: Utc::now(),
                    });
                }
            }
        }
        Ok(written)
    }

    async fn update_ranks(&self, ranks: Vec<AgentRank>) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        for rank in &ranks {
            if let Some(row) = rows.iter_mut().find(|r| r.id == rank.stat_id) {
                row.rank_overall = Some(rank.rank_overall);
                row.rank_in_aor = Some(rank.rank_in_aor);
            }
        }
        Ok(ranks.len())
    }

    fn list_for_year(&self, year: i32, aor: Option<&str>) -> Result<Vec<AgentStat>> {
        let mut rows: Vec<AgentStat> = self
            .get_all()
            .into_iter()
            .filter(|r| r.year == year && aor.map_or(true, |a| r.aor == a))
            .collect();
        rows.sort_by_key(|r| r.rank_overall.unwrap_or(i32::MAX));
        Ok(rows)
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn sale(
    price: Decimal,
    list_agent: Option<(i64, Option<&str>)>,
    buyer_agent: Option<(i64, Option<&str>)>,
) -> ClosedSale {
    ClosedSale {
        listing_key_numeric: 1,
        close_price: Some(price),
        close_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        list_agent_key_numeric: list_agent.map(|(k, _)| k),
        list_agent_aor: list_agent.and_then(|(_, a)| a.map(String::from)),
        buyer_agent_key_numeric: buyer_agent.map(|(k, _)| k),
        buyer_agent_aor: buyer_agent.and_then(|(_, a)| a.map(String::from)),
    }
}

struct Fixture {
    service: AgentStatsService,
    stats: MockStatRepository,
}

fn fixture(sales: Vec<ClosedSale>, members: &[i64]) -> Fixture {
    let properties = MockPropertyRepository {
        sales: Arc::new(Mutex::new(sales)),
    };
    let stats = MockStatRepository::default();
    let service = AgentStatsService::new(
        Arc::new(properties),
        Arc::new(MockMemberRepository::with_members(members)),
        Arc::new(stats.clone()),
    );
    Fixture { service, stats }
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_two_listings_for_one_list_agent() {
    let f = fixture(
        vec![
            sale(dec!(100000), Some((10, Some("UCAOR"))), None),
            sale(dec!(200000), Some((10, Some("UCAOR"))), None),
        ],
        &[10],
    );

    let written = f.service.recompute(2024).await.unwrap();
    assert_eq!(written, 1);

    let stat = f.stats.find("member-10", "UCAOR").unwrap();
    assert_eq!(stat.listing_volume, dec!(300000));
    assert_eq!(stat.listing_count, 2);
    assert_eq!(stat.buyer_volume, dec!(0));
    assert_eq!(stat.buyer_count, 0);
    assert_eq!(stat.total_volume, dec!(300000));
    assert_eq!(stat.transaction_count, 2);
    assert_eq!(stat.average_price, Some(dec!(150000)));
    assert_eq!(stat.rank_overall, Some(1));
    assert_eq!(stat.rank_in_aor, Some(1));
}

#[tokio::test]
async fn test_one_sale_credits_both_sides_independently() {
    let f = fixture(
        vec![sale(dec!(400000), Some((1, Some("NUAR"))), Some((2, Some("SLBR"))))],
        &[1, 2],
    );

    assert_eq!(f.service.recompute(2024).await.unwrap(), 2);

    let seller = f.stats.find("member-1", "NUAR").unwrap();
    assert_eq!(seller.listing_volume, dec!(400000));
    assert_eq!(seller.buyer_volume, dec!(0));

    let buyer = f.stats.find("member-2", "SLBR").unwrap();
    assert_eq!(buyer.buyer_volume, dec!(400000));
    assert_eq!(buyer.buyer_count, 1);
    assert_eq!(buyer.listing_count, 0);
}

#[tokio::test]
async fn test_same_agent_both_sides_accrues_to_one_bucket() {
    let f = fixture(
        vec![sale(dec!(250000), Some((5, Some("UCAOR"))), Some((5, Some("UCAOR"))))],
        &[5],
    );

    assert_eq!(f.service.recompute(2024).await.unwrap(), 1);

    let stat = f.stats.find("member-5", "UCAOR").unwrap();
    assert_eq!(stat.listing_volume, dec!(250000));
    assert_eq!(stat.buyer_volume, dec!(250000));
    assert_eq!(stat.total_volume, dec!(500000));
    assert_eq!(stat.transaction_count, 2);
    assert_eq!(stat.average_price, Some(dec!(250000)));
}

#[tokio::test]
async fn test_missing_aor_is_bucketed_as_unknown() {
    let f = fixture(
        vec![
            sale(dec!(300000), Some((7, None)), None),
            sale(dec!(100000), Some((7, Some(""))), None),
        ],
        &[7],
    );

    f.service.recompute(2024).await.unwrap();

    let stat = f.stats.find("member-7", UNKNOWN_AOR).unwrap();
    assert_eq!(stat.listing_volume, dec!(400000));
    assert_eq!(stat.listing_count, 2);
}

#[tokio::test]
async fn test_agent_without_member_row_is_dropped() {
    let f = fixture(
        vec![sale(dec!(300000), Some((1, Some("UCAOR"))), Some((999, Some("UCAOR"))))],
        &[1],
    );

    assert_eq!(f.service.recompute(2024).await.unwrap(), 1);
    assert_eq!(f.stats.get_all().len(), 1);
    assert!(f.stats.find("member-999", "UCAOR").is_none());
}

#[tokio::test]
async fn test_totals_and_average_hold_for_every_row() {
    let f = fixture(
        vec![
            sale(dec!(333333.33), Some((1, Some("A"))), Some((2, Some("A")))),
            sale(dec!(100000), Some((1, Some("A"))), Some((3, Some("B")))),
            sale(dec!(250000.10), Some((2, Some("A"))), Some((1, Some("B")))),
        ],
        &[1, 2, 3],
    );

    f.service.recompute(2024).await.unwrap();

    for stat in f.stats.get_all() {
        assert_eq!(stat.total_volume, stat.listing_volume + stat.buyer_volume);
        assert_eq!(stat.transaction_count, stat.listing_count + stat.buyer_count);
        let avg = stat.average_price.unwrap();
        let diff = (avg * Decimal::from(stat.transaction_count) - stat.total_volume).abs();
        assert!(diff <= dec!(0.01) * Decimal::from(stat.transaction_count));
    }
}

#[tokio::test]
async fn test_ranks_are_contiguous_overall_and_per_aor() {
    let f = fixture(
        vec![
            sale(dec!(500000), Some((1, Some("A"))), None),
            sale(dec!(300000), Some((2, Some("A"))), None),
            sale(dec!(300000), Some((3, Some("B"))), None),
            sale(dec!(100000), Some((4, Some("B"))), None),
            sale(dec!(900000), Some((5, Some("C"))), None),
        ],
        &[1, 2, 3, 4, 5],
    );

    f.service.recompute(2024).await.unwrap();

    let rows = f.service.leaderboard(2024, None, 100).unwrap();
    let overall: Vec<i32> = rows.iter().map(|r| r.rank_overall.unwrap()).collect();
    assert_eq!(overall, vec![1, 2, 3, 4, 5]);
    for pair in rows.windows(2) {
        assert!(pair[0].total_volume >= pair[1].total_volume);
    }

    // Tie at 300000 is broken by member key.
    assert_eq!(rows[2].member_key_numeric, 2);
    assert_eq!(rows[3].member_key_numeric, 3);

    for aor in ["A", "B", "C"] {
        let mut in_aor: Vec<i32> = rows
            .iter()
            .filter(|r| r.aor == aor)
            .map(|r| r.rank_in_aor.unwrap())
            .collect();
        in_aor.sort_unstable();
        let expected: Vec<i32> = (1..=in_aor.len() as i32).collect();
        assert_eq!(in_aor, expected);
    }
}

#[tokio::test]
async fn test_recompute_replaces_stale_rows() {
    let f = fixture(
        vec![
            sale(dec!(100000), Some((1, Some("A"))), None),
            sale(dec!(100000), Some((2, Some("A"))), None),
        ],
        &[1, 2],
    );
    f.service.recompute(2024).await.unwrap();
    assert_eq!(f.stats.get_all().len(), 2);

    // Agent 2's sale drops out of the data set.
    let properties = MockPropertyRepository {
        sales: Arc::new(Mutex::new(vec![sale(dec!(150000), Some((1, Some("A"))), None)])),
    };
    let service = AgentStatsService::new(
        Arc::new(properties),
        Arc::new(MockMemberRepository::with_members(&[1, 2])),
        Arc::new(f.stats.clone()),
    );
    assert_eq!(service.recompute(2024).await.unwrap(), 1);

    let rows = f.stats.get_all();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_volume, dec!(150000));
    assert_eq!(rows[0].rank_overall, Some(1));
}

#[test]
fn test_accumulate_counts_sale_without_price() {
    let mut no_price = sale(dec!(0), Some((1, Some("A"))), None);
    no_price.close_price = None;

    let buckets = accumulate_sales(&[no_price]);
    let bucket = &buckets[&(1, "A".to_string())];
    assert_eq!(bucket.listing_count, 1);
    assert_eq!(bucket.listing_volume, Decimal::ZERO);
    assert_eq!(bucket.average_price(), Some(Decimal::ZERO));
}

#[test]
fn test_empty_bucket_has_no_average() {
    assert_eq!(SalesBucket::default().average_price(), None);
}
