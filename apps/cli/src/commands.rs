//! Command-line modes and their dispatch onto the orchestrator.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use salesboard_core::members::MemberRepositoryTrait;
use salesboard_core::stats::{AgentStat, AgentStatsService, AgentStatsServiceTrait};
use salesboard_core::sync::{SyncRun, SyncRunRepositoryTrait};
use salesboard_core::utils::time_utils::current_year;
use salesboard_mls::{MlsApiClient, RateLimitedClient, WfrmlsClient};
use salesboard_storage_sqlite::{
    open, AgentStatRepository, MemberRepository, PropertyRepository, SyncRunRepository,
};
use salesboard_sync::{LogProgressReporter, Reconciler, SyncConfig, SyncMode, SyncOrchestrator};

use crate::config::Config;

/// Synchronize MLS members and listings and rebuild agent rankings.
///
/// Runs an incremental sync of members and listings by default, followed by a
/// stats recompute for the target year.
#[derive(Parser, Debug)]
#[command(name = "salesboard", version, about, long_about = None)]
pub struct Cli {
    /// Re-fetch everything instead of continuing from the last watermark
    #[arg(long)]
    pub full: bool,

    /// Year whose closed listings are synced and ranked (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Only sync members
    #[arg(long, conflicts_with_all = ["properties_only", "stats_only"])]
    pub members_only: bool,

    /// Only sync listings
    #[arg(long, conflicts_with = "stats_only")]
    pub properties_only: bool,

    /// Only recalculate agent statistics
    #[arg(long)]
    pub stats_only: bool,

    /// Show the most recent sync runs and exit
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "20")]
    pub history: Option<i64>,

    /// Show the top N agents for the year and exit
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Restrict --top to one association of realtors
    #[arg(long, requires = "top")]
    pub aor: Option<String>,
}

impl Cli {
    fn mode(&self) -> SyncMode {
        if self.full {
            SyncMode::Full
        } else {
            SyncMode::Incremental
        }
    }

    /// Whether this invocation talks to the MLS API.
    fn needs_api(&self) -> bool {
        self.history.is_none() && self.top.is_none() && !self.stats_only
    }
}

struct Repositories {
    members: Arc<MemberRepository>,
    properties: Arc<PropertyRepository>,
    sync_runs: Arc<SyncRunRepository>,
    stats: Arc<AgentStatRepository>,
}

impl Repositories {
    fn open(db_path: &str) -> anyhow::Result<Self> {
        let (pool, writer) =
            open(db_path).with_context(|| format!("Failed to open database at {}", db_path))?;
        tracing::info!("Database path in use: {}", db_path);
        Ok(Self {
            members: Arc::new(MemberRepository::new(pool.clone(), writer.clone())),
            properties: Arc::new(PropertyRepository::new(pool.clone(), writer.clone())),
            sync_runs: Arc::new(SyncRunRepository::new(pool.clone(), writer.clone())),
            stats: Arc::new(AgentStatRepository::new(pool, writer)),
        })
    }

    fn stats_service(&self) -> Arc<AgentStatsService> {
        Arc::new(AgentStatsService::new(
            self.properties.clone(),
            self.members.clone(),
            self.stats.clone(),
        ))
    }
}

pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let year = cli.year.unwrap_or_else(current_year);

    // Credentials are checked before any storage or network work.
    let client: Option<Arc<dyn MlsApiClient>> = if cli.needs_api() {
        let inner = WfrmlsClient::new(config.mls_client_config()?)?;
        Some(Arc::new(RateLimitedClient::new(inner, config.retry_policy())))
    } else {
        None
    };

    let repos = Repositories::open(&config.db_path)?;

    if let Some(limit) = cli.history {
        print_history(&repos.sync_runs.list_recent(limit)?);
        return Ok(());
    }
    if let Some(limit) = cli.top {
        let leaders = repos
            .stats_service()
            .leaderboard(year, cli.aor.as_deref(), limit)?;
        print_leaderboard(year, cli.aor.as_deref(), &leaders, &repos)?;
        return Ok(());
    }
    if cli.stats_only {
        let updated = repos.stats_service().recompute(year).await?;
        println!("Updated {} agent stats records for {}", updated, year);
        return Ok(());
    }

    let Some(client) = client else {
        anyhow::bail!("No MLS client configured");
    };
    let orchestrator = SyncOrchestrator::new(
        client,
        Reconciler::new(repos.members.clone(), repos.properties.clone()),
        repos.sync_runs.clone(),
        repos.stats_service(),
        Arc::new(LogProgressReporter),
        SyncConfig::default(),
    );

    let mode = cli.mode();
    println!(
        "Mode: {}, year: {}",
        if mode == SyncMode::Full { "full" } else { "incremental" },
        year
    );

    if mode == SyncMode::Full && !(cli.members_only || cli.properties_only) {
        let report = orchestrator.run_full_sync(year).await?;
        print_counters("Members", &report.members);
        print_counters("Properties", &report.properties);
        println!("Updated {} agent stats records", report.stats_updated);
        return Ok(());
    }

    if !cli.properties_only {
        let run = orchestrator.sync_members(mode).await?;
        print_counters("Members", &run);
    }
    if !cli.members_only {
        let run = orchestrator.sync_properties(year, mode).await?;
        print_counters("Properties", &run);
    }
    let updated = orchestrator.recompute_stats(year).await?;
    println!("Updated {} agent stats records", updated);
    Ok(())
}

fn print_counters(label: &str, run: &SyncRun) {
    println!(
        "{}: {} processed, {} created, {} updated",
        label,
        run.counters.records_processed,
        run.counters.records_created,
        run.counters.records_updated
    );
}

fn print_history(runs: &[SyncRun]) {
    if runs.is_empty() {
        println!("No sync runs recorded yet");
        return;
    }
    println!(
        "{:<20} {:<11} {:<10} {:>9} {:>8} {:>8} {:>8}  error",
        "started", "type", "status", "processed", "created", "updated", "secs"
    );
    for run in runs {
        let secs = run
            .duration()
            .map(|d| format!("{:.1}", d.num_milliseconds() as f64 / 1000.0))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<11} {:<10} {:>9} {:>8} {:>8} {:>8}  {}",
            run.started_at.format("%Y-%m-%d %H:%M:%S"),
            run.sync_type,
            run.status,
            run.counters.records_processed,
            run.counters.records_created,
            run.counters.records_updated,
            secs,
            run.error_message.as_deref().unwrap_or("")
        );
    }
}

fn print_leaderboard(
    year: i32,
    aor: Option<&str>,
    leaders: &[AgentStat],
    repos: &Repositories,
) -> anyhow::Result<()> {
    match aor {
        Some(aor) => println!("Top agents for {} in {}", year, aor),
        None => println!("Top agents for {}", year),
    }
    for stat in leaders {
        let name = repos
            .members
            .get_by_key(stat.member_key_numeric)?
            .map(|m| m.display_name())
            .unwrap_or_else(|| format!("Member {}", stat.member_key_numeric));
        let rank = if aor.is_some() {
            stat.rank_in_aor
        } else {
            stat.rank_overall
        };
        println!(
            "{:>4}  {:<32} {:<10} {:>16} {:>5} sales",
            rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            name,
            stat.aor,
            stat.total_volume.round_dp(2).to_string(),
            stat.transaction_count
        );
    }
    Ok(())
}
