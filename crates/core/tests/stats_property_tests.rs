//! Property-based tests for the aggregation engine.
//!
//! Random closed-sale sets are aggregated and ranked; totals and rank
//! sequences must hold for every generated input.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use salesboard_core::constants::UNKNOWN_AOR;
use salesboard_core::properties::ClosedSale;
use salesboard_core::stats::{accumulate_sales, compute_ranks, AgentStat};

// =============================================================================
// Generators
// =============================================================================

fn arb_aor() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("UCAOR".to_string())),
        Just(Some("SLBR".to_string())),
        Just(Some("NUAR".to_string())),
    ]
}

/// Prices in cents, up to two million.
fn arb_price() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::weighted(0.95, (0i64..200_000_000).prop_map(|cents| Decimal::new(cents, 2)))
}

fn arb_sale() -> impl Strategy<Value = ClosedSale> {
    (
        1i64..100_000,
        arb_price(),
        proptest::option::of(1i64..30),
        arb_aor(),
        proptest::option::of(1i64..30),
        arb_aor(),
    )
        .prop_map(|(listing, price, list_agent, list_aor, buyer_agent, buyer_aor)| ClosedSale {
            listing_key_numeric: listing,
            close_price: price,
            close_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            list_agent_key_numeric: list_agent,
            list_agent_aor: list_aor,
            buyer_agent_key_numeric: buyer_agent,
            buyer_agent_aor: buyer_aor,
        })
}

fn to_stats(sales: &[ClosedSale]) -> Vec<AgentStat> {
    accumulate_sales(sales)
        .into_iter()
        .enumerate()
        .map(|(i, ((member_key, aor), bucket))| {
            let new_stat = bucket.into_new_stat(format!("member-{}", member_key), 2024, aor);
            AgentStat {
                id: format!("stat-{}", i),
                member_id: new_stat.member_id,
                member_key_numeric: member_key,
                year: new_stat.year,
                aor: new_stat.aor,
                listing_volume: new_stat.listing_volume,
                buyer_volume: new_stat.buyer_volume,
                total_volume: new_stat.total_volume,
                listing_count: new_stat.listing_count,
                buyer_count: new_stat.buyer_count,
                transaction_count: new_stat.transaction_count,
                average_price: new_stat.average_price,
                rank_overall: None,
                rank_in_aor: None,
                updated_at: Utc::now(),
            }
        })
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every bucket's total is the sum of its sides and its average times its
    /// count reproduces the total within a cent per transaction.
    #[test]
    fn prop_bucket_totals_are_consistent(sales in proptest::collection::vec(arb_sale(), 0..60)) {
        for stat in to_stats(&sales) {
            prop_assert_eq!(stat.total_volume, stat.listing_volume + stat.buyer_volume);
            prop_assert_eq!(stat.transaction_count, stat.listing_count + stat.buyer_count);
            prop_assert!(stat.transaction_count > 0);

            let average = stat.average_price.expect("non-empty bucket has an average");
            let count = Decimal::from(stat.transaction_count);
            let drift = (average * count - stat.total_volume).abs();
            prop_assert!(drift <= Decimal::new(1, 2) * count);
        }
    }

    /// Volume is conserved: each priced side of a sale lands in exactly one bucket.
    #[test]
    fn prop_volume_is_conserved(sales in proptest::collection::vec(arb_sale(), 0..60)) {
        let expected: Decimal = sales
            .iter()
            .map(|s| {
                let price = s.close_price.unwrap_or(Decimal::ZERO);
                let sides = s.list_agent_key_numeric.is_some() as i64
                    + s.buyer_agent_key_numeric.is_some() as i64;
                price * Decimal::from(sides)
            })
            .sum();
        let actual: Decimal = to_stats(&sales).iter().map(|s| s.total_volume).sum();
        prop_assert_eq!(actual, expected);
    }

    /// Missing associations never produce an empty bucket name.
    #[test]
    fn prop_missing_aor_maps_to_unknown(sales in proptest::collection::vec(arb_sale(), 0..40)) {
        for stat in to_stats(&sales) {
            prop_assert!(!stat.aor.is_empty());
        }
        let has_missing = sales.iter().any(|s| {
            (s.list_agent_key_numeric.is_some() && s.list_agent_aor.is_none())
                || (s.buyer_agent_key_numeric.is_some() && s.buyer_agent_aor.is_none())
        });
        if has_missing {
            prop_assert!(to_stats(&sales).iter().any(|s| s.aor == UNKNOWN_AOR));
        }
    }

    /// Overall ranks are 1..N with volume non-increasing; per-association
    /// ranks are 1..k within each association.
    #[test]
    fn prop_ranks_are_contiguous(sales in proptest::collection::vec(arb_sale(), 0..80)) {
        let stats = to_stats(&sales);
        let ranks = compute_ranks(&stats);
        prop_assert_eq!(ranks.len(), stats.len());

        let by_id: BTreeMap<&str, &AgentStat> = stats.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut overall: Vec<(i32, &AgentStat)> = ranks
            .iter()
            .map(|r| (r.rank_overall, by_id[r.stat_id.as_str()]))
            .collect();
        overall.sort_by_key(|(rank, _)| *rank);
        for (i, (rank, _)) in overall.iter().enumerate() {
            prop_assert_eq!(*rank, i as i32 + 1);
        }
        for pair in overall.windows(2) {
            prop_assert!(pair[0].1.total_volume >= pair[1].1.total_volume);
        }

        let aors: HashSet<&str> = stats.iter().map(|s| s.aor.as_str()).collect();
        for aor in aors {
            let mut in_aor: Vec<(i32, &AgentStat)> = ranks
                .iter()
                .map(|r| (r.rank_in_aor, by_id[r.stat_id.as_str()]))
                .filter(|(_, s)| s.aor == aor)
                .collect();
            in_aor.sort_by_key(|(rank, _)| *rank);
            for (i, (rank, _)) in in_aor.iter().enumerate() {
                prop_assert_eq!(*rank, i as i32 + 1);
            }
            for pair in in_aor.windows(2) {
                prop_assert!(pair[0].1.total_volume >= pair[1].1.total_volume);
            }
        }
    }

    /// Ranking the same rows twice, in any input order, gives the same answer.
    #[test]
    fn prop_ranking_is_deterministic(sales in proptest::collection::vec(arb_sale(), 0..40)) {
        let stats = to_stats(&sales);
        let mut reversed = stats.clone();
        reversed.reverse();

        let mut a = compute_ranks(&stats);
        let mut b = compute_ranks(&reversed);
        a.sort_by(|x, y| x.stat_id.cmp(&y.stat_id));
        b.sort_by(|x, y| x.stat_id.cmp(&y.stat_id));
        prop_assert_eq!(a, b);
    }
}
