//! Stats module - per-agent sales volume and rankings.

mod stats_calculator;
mod stats_model;
mod stats_service;
mod stats_traits;

#[cfg(test)]
mod stats_service_tests;

pub use stats_calculator::{accumulate_sales, compute_ranks, BucketKey, SalesBucket};
pub use stats_model::{AgentRank, AgentStat, NewAgentStat};
pub use stats_service::AgentStatsService;
pub use stats_traits::{AgentStatRepositoryTrait, AgentStatsServiceTrait};
