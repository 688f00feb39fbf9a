use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::stats_calculator::{accumulate_sales, compute_ranks};
use super::stats_model::{AgentStat, NewAgentStat};
use super::stats_traits::{AgentStatRepositoryTrait, AgentStatsServiceTrait};
use crate::errors::Result;
use crate::members::MemberRepositoryTrait;
use crate::properties::PropertyRepositoryTrait;

/// Recomputes agent rankings from the reconciled listings.
pub struct AgentStatsService {
    property_repository: Arc<dyn PropertyRepositoryTrait>,
    member_repository: Arc<dyn MemberRepositoryTrait>,
    stat_repository: Arc<dyn AgentStatRepositoryTrait>,
}

impl AgentStatsService {
    pub fn new(
        property_repository: Arc<dyn PropertyRepositoryTrait>,
        member_repository: Arc<dyn MemberRepositoryTrait>,
        stat_repository: Arc<dyn AgentStatRepositoryTrait>,
    ) -> Self {
        Self {
            property_repository,
            member_repository,
            stat_repository,
        }
    }
}

#[async_trait]
impl AgentStatsServiceTrait for AgentStatsService {
    async fn recompute(&self, year: i32) -> Result<usize> {
        info!("Calculating agent stats for {}...", year);

        let sales = self.property_repository.list_closed_sales(year)?;
        let buckets = accumulate_sales(&sales);

        let mut member_keys: Vec<i64> = buckets.keys().map(|(key, _)| *key).collect();
        member_keys.dedup();
        let member_ids = self.member_repository.find_ids_by_keys(&member_keys)?;

        let mut dropped = 0usize;
        let new_stats: Vec<NewAgentStat> = buckets
            .into_iter()
            .filter_map(|((member_key, aor), bucket)| match member_ids.get(&member_key) {
                Some(member_id) => Some(bucket.into_new_stat(member_id.clone(), year, aor)),
                None => {
                    dropped += 1;
                    None
                }
            })
            .collect();

        if dropped > 0 {
            debug!(
                "Skipped {} agent buckets for {} with no synced member",
                dropped, year
            );
        }

        let written = self.stat_repository.replace_for_year(year, new_stats).await?;

        let stored = self.stat_repository.list_for_year(year, None)?;
        let ranks = compute_ranks(&stored);
        self.stat_repository.update_ranks(ranks).await?;

        info!(
            "Updated {} agent stats records for {} from {} closed sales",
            written,
            year,
            sales.len()
        );
        Ok(written)
    }

    fn leaderboard(&self, year: i32, aor: Option<&str>, limit: usize) -> Result<Vec<AgentStat>> {
        let mut stats = self.stat_repository.list_for_year(year, aor)?;
        stats.truncate(limit);
        Ok(stats)
    }
}
