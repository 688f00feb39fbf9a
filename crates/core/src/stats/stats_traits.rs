//! Agent stats repository and service traits.

use async_trait::async_trait;

use super::stats_model::{AgentRank, AgentStat, NewAgentStat};
use crate::errors::Result;

/// Persistence contract for agent ranking rows.
#[async_trait]
pub trait AgentStatRepositoryTrait: Send + Sync {
    /// Upserts one row per (member, year, aor) and deletes rows of `year` that
    /// are not in `stats`. Returns the number of rows written.
    async fn replace_for_year(&self, year: i32, stats: Vec<NewAgentStat>) -> Result<usize>;

    /// Stores ranks computed over the rows of a year.
    async fn update_ranks(&self, ranks: Vec<AgentRank>) -> Result<usize>;

    /// Rows of a year, optionally restricted to one association, best first.
    fn list_for_year(&self, year: i32, aor: Option<&str>) -> Result<Vec<AgentStat>>;
}

/// Aggregation engine: derives ranked per-agent statistics from listings.
#[async_trait]
pub trait AgentStatsServiceTrait: Send + Sync {
    /// Rebuilds every stat row and rank for `year`. Returns the number of rows
    /// written.
    async fn recompute(&self, year: i32) -> Result<usize>;

    /// Top `limit` rows for a year, optionally within one association.
    fn leaderboard(&self, year: i32, aor: Option<&str>, limit: usize) -> Result<Vec<AgentStat>>;
}
