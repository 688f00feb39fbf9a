//! Database model for agent ranking rows.

use diesel::prelude::*;

use salesboard_core::stats::{AgentStat, NewAgentStat};

use crate::utils::{decimal_to_text, text_to_decimal, text_to_opt_decimal, text_to_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::agent_stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AgentStatDB {
    pub id: String,
    pub member_id: String,
    pub year: i32,
    pub aor: String,
    pub listing_volume: String,
    pub buyer_volume: String,
    pub total_volume: String,
    pub listing_count: i32,
    pub buyer_count: i32,
    pub transaction_count: i32,
    pub average_price: Option<String>,
    pub rank_overall: Option<i32>,
    pub rank_in_aor: Option<i32>,
    pub updated_at: String,
}

impl AgentStatDB {
    /// Unranked row for a freshly computed bucket.
    pub fn from_new(id: String, stat: NewAgentStat, stamp: String) -> Self {
        Self {
            id,
            member_id: stat.member_id,
            year: stat.year,
            aor: stat.aor,
            listing_volume: decimal_to_text(stat.listing_volume),
            buyer_volume: decimal_to_text(stat.buyer_volume),
            total_volume: decimal_to_text(stat.total_volume),
            listing_count: stat.listing_count,
            buyer_count: stat.buyer_count,
            transaction_count: stat.transaction_count,
            average_price: stat.average_price.map(decimal_to_text),
            rank_overall: None,
            rank_in_aor: None,
            updated_at: stamp,
        }
    }

    pub fn into_domain(self, member_key_numeric: i64) -> AgentStat {
        AgentStat {
            id: self.id,
            member_id: self.member_id,
            member_key_numeric,
            year: self.year,
            aor: self.aor,
            listing_volume: text_to_decimal(&self.listing_volume),
            buyer_volume: text_to_decimal(&self.buyer_volume),
            total_volume: text_to_decimal(&self.total_volume),
            listing_count: self.listing_count,
            buyer_count: self.buyer_count,
            transaction_count: self.transaction_count,
            average_price: text_to_opt_decimal(self.average_price),
            rank_overall: self.rank_overall,
            rank_in_aor: self.rank_in_aor,
            updated_at: text_to_timestamp(&self.updated_at),
        }
    }
}
