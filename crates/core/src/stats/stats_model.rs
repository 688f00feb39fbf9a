//! Agent ranking domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales totals for one (agent, year, association) bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStat {
    pub id: String,
    pub member_id: String,
    /// Upstream key of the member, used as the ranking tie-break.
    pub member_key_numeric: i64,
    pub year: i32,
    pub aor: String,
    pub listing_volume: Decimal,
    pub buyer_volume: Decimal,
    pub total_volume: Decimal,
    pub listing_count: i32,
    pub buyer_count: i32,
    pub transaction_count: i32,
    /// `None` when `transaction_count` is zero.
    pub average_price: Option<Decimal>,
    pub rank_overall: Option<i32>,
    pub rank_in_aor: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for one bucket produced by a recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgentStat {
    pub member_id: String,
    pub year: i32,
    pub aor: String,
    pub listing_volume: Decimal,
    pub buyer_volume: Decimal,
    pub total_volume: Decimal,
    pub listing_count: i32,
    pub buyer_count: i32,
    pub transaction_count: i32,
    pub average_price: Option<Decimal>,
}

/// Ranks assigned to one stored stat row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRank {
    pub stat_id: String,
    pub rank_overall: i32,
    pub rank_in_aor: i32,
}
