//! Pure aggregation and ranking over closed sales.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use super::stats_model::{AgentRank, AgentStat, NewAgentStat};
use crate::constants::{UNKNOWN_AOR, VOLUME_DECIMAL_PLACES};
use crate::properties::ClosedSale;

/// (member key, association) pair a sale side is credited to.
pub type BucketKey = (i64, String);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesBucket {
    pub listing_volume: Decimal,
    pub buyer_volume: Decimal,
    pub listing_count: i32,
    pub buyer_count: i32,
}

impl SalesBucket {
    pub fn total_volume(&self) -> Decimal {
        self.listing_volume + self.buyer_volume
    }

    pub fn transaction_count(&self) -> i32 {
        self.listing_count + self.buyer_count
    }

    pub fn average_price(&self) -> Option<Decimal> {
        let count = self.transaction_count();
        (count > 0).then(|| {
            (self.total_volume() / Decimal::from(count)).round_dp(VOLUME_DECIMAL_PLACES)
        })
    }

    pub fn into_new_stat(self, member_id: String, year: i32, aor: String) -> NewAgentStat {
        NewAgentStat {
            member_id,
            year,
            aor,
            total_volume: self.total_volume(),
            transaction_count: self.transaction_count(),
            average_price: self.average_price(),
            listing_volume: self.listing_volume,
            buyer_volume: self.buyer_volume,
            listing_count: self.listing_count,
            buyer_count: self.buyer_count,
        }
    }
}

fn aor_or_unknown(aor: Option<&str>) -> String {
    aor.map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(UNKNOWN_AOR)
        .to_string()
}

/// Credits each sale to its listing agent under the listing agent's
/// association and, separately, to its buyer agent under the buyer agent's
/// association. A missing close price still counts as a transaction.
pub fn accumulate_sales(sales: &[ClosedSale]) -> BTreeMap<BucketKey, SalesBucket> {
    let mut buckets: BTreeMap<BucketKey, SalesBucket> = BTreeMap::new();

    for sale in sales {
        let price = sale.close_price.unwrap_or(Decimal::ZERO);

        if let Some(agent) = sale.list_agent_key_numeric {
            let bucket = buckets
                .entry((agent, aor_or_unknown(sale.list_agent_aor.as_deref())))
                .or_default();
            bucket.listing_volume += price;
            bucket.listing_count += 1;
        }

        if let Some(agent) = sale.buyer_agent_key_numeric {
            let bucket = buckets
                .entry((agent, aor_or_unknown(sale.buyer_agent_aor.as_deref())))
                .or_default();
            bucket.buyer_volume += price;
            bucket.buyer_count += 1;
        }
    }

    buckets
}

/// 1-based ranks with no gaps or shared positions, by `total_volume`
/// descending, overall and within each association. Ties fall back to
/// `member_key_numeric`, then `aor`, ascending.
pub fn compute_ranks(stats: &[AgentStat]) -> Vec<AgentRank> {
    let mut ordered: Vec<&AgentStat> = stats.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_volume
            .cmp(&a.total_volume)
            .then_with(|| a.member_key_numeric.cmp(&b.member_key_numeric))
            .then_with(|| a.aor.cmp(&b.aor))
    });

    let mut next_in_aor: HashMap<&str, i32> = HashMap::new();
    ordered
        .into_iter()
        .enumerate()
        .map(|(position, stat)| {
            let in_aor = next_in_aor.entry(stat.aor.as_str()).or_insert(0);
            *in_aor += 1;
            AgentRank {
                stat_id: stat.id.clone(),
                rank_overall: position as i32 + 1,
                rank_in_aor: *in_aor,
            }
        })
        .collect()
}
