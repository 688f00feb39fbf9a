use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use salesboard_core::stats::{AgentRank, AgentStat, AgentStatRepositoryTrait, NewAgentStat};
use salesboard_core::Result;

use super::model::AgentStatDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{agent_stats, members};
use crate::utils::timestamp_to_text;

pub struct AgentStatRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AgentStatRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AgentStatRepository { pool, writer }
    }
}

#[async_trait]
impl AgentStatRepositoryTrait for AgentStatRepository {
    async fn replace_for_year(&self, year: i32, stats: Vec<NewAgentStat>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Every row written here carries the same stamp; the rest of the year is stale.
                let stamp = timestamp_to_text(Utc::now());
                let mut written = 0;

                for stat in stats {
                    let existing_id = agent_stats::table
                        .filter(agent_stats::member_id.eq(&stat.member_id))
                        .filter(agent_stats::year.eq(stat.year))
                        .filter(agent_stats::aor.eq(&stat.aor))
                        .select(agent_stats::id)
                        .first::<String>(conn)
                        .optional()
                        .map_err(StorageError::from)?;

                    written += match existing_id {
                        Some(existing_id) => {
                            let row = AgentStatDB::from_new(existing_id.clone(), stat, stamp.clone());
                            diesel::update(agent_stats::table.find(&existing_id))
                                .set(&row)
                                .execute(conn)
                                .map_err(StorageError::from)?
                        }
                        None => {
                            let row =
                                AgentStatDB::from_new(Uuid::new_v4().to_string(), stat, stamp.clone());
                            diesel::insert_into(agent_stats::table)
                                .values(&row)
                                .execute(conn)
                                .map_err(StorageError::from)?
                        }
                    };
                }

                let removed = diesel::delete(
                    agent_stats::table
                        .filter(agent_stats::year.eq(year))
                        .filter(agent_stats::updated_at.ne(&stamp)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                debug!(
                    "Stored {} agent stats for {} and removed {} stale rows",
                    written, year, removed
                );

                Ok(written)
            })
            .await
    }

    async fn update_ranks(&self, ranks: Vec<AgentRank>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut updated = 0;
                for rank in ranks {
                    updated += diesel::update(agent_stats::table.find(&rank.stat_id))
                        .set((
                            agent_stats::rank_overall.eq(Some(rank.rank_overall)),
                            agent_stats::rank_in_aor.eq(Some(rank.rank_in_aor)),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(updated)
            })
            .await
    }

    fn list_for_year(&self, year: i32, aor: Option<&str>) -> Result<Vec<AgentStat>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = agent_stats::table
            .inner_join(members::table)
            .filter(agent_stats::year.eq(year))
            .select((AgentStatDB::as_select(), members::member_key_numeric))
            .into_boxed();
        if let Some(aor) = aor {
            query = query.filter(agent_stats::aor.eq(aor.to_string()));
        }

        let rows = query
            .load::<(AgentStatDB, i64)>(&mut conn)
            .map_err(StorageError::from)?;
        let mut stats: Vec<AgentStat> = rows
            .into_iter()
            .map(|(row, member_key)| row.into_domain(member_key))
            .collect();

        // Unranked rows last; within an association the association rank decides.
        let by_aor = aor.is_some();
        stats.sort_by(|a, b| {
            let rank = |s: &AgentStat| if by_aor { s.rank_in_aor } else { s.rank_overall };
            let key = |s: &AgentStat| (rank(s).is_none(), rank(s));
            key(a)
                .cmp(&key(b))
                .then_with(|| b.total_volume.cmp(&a.total_volume))
                .then_with(|| a.member_key_numeric.cmp(&b.member_key_numeric))
        });
        Ok(stats)
    }
}
