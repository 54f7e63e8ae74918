//! League command: standings plus the five league-wide stat tables

use serde::Serialize;
use tracing::warn;

use crate::{
    cli::types::{Denominator, PlayerId},
    core::{FileStore, HistoryStore, KeyValueStore},
    fpl::{fetch_league, FplApi, FplClient, League, Session},
    stats::{AggregatorConfig, LeagueAggregator, LeagueStats, ProgressObserver, StatKind, StatRow, TeamFailure},
    LeagueId, Result,
};

use super::{completeness_warnings, render, resolve_league_id, StatusProgress};

/// Parameters for the league command
#[derive(Debug)]
pub struct LeagueParams {
    pub league_id: Option<LeagueId>,
    pub as_json: bool,
    pub top: Option<usize>,
    pub denominator: Denominator,
    pub concurrency: usize,
}

/// A loaded league with its aggregated statistics
#[derive(Debug, Clone)]
pub struct LeagueReport {
    pub league: League,
    pub stats: LeagueStats,
}

/// Fetch standings, remember the league, then aggregate every team.
///
/// An unknown league or a failed bootstrap load is an error. Individual
/// teams that fail are reported inside the stats. A history write failure
/// is logged and otherwise ignored.
pub async fn load_league_report<A: FplApi, S: KeyValueStore>(
    session: &Session<A>,
    history: &mut HistoryStore<S>,
    league_id: LeagueId,
    config: AggregatorConfig,
    observer: &mut dyn ProgressObserver,
) -> Result<LeagueReport> {
    let league = fetch_league(session.api(), league_id).await?;

    if let Err(e) = history.add(league.id, league.name.clone()) {
        warn!(error = %e, "could not save league history");
    }

    session.load().await?;

    let stats = LeagueAggregator::new(session)
        .with_config(config)
        .aggregate(&league.standings, observer)
        .await;

    Ok(LeagueReport { league, stats })
}

#[derive(Debug, Serialize)]
struct LeagueJson<'a> {
    league_id: LeagueId,
    league_name: &'a str,
    standings: &'a [crate::fpl::types::StandingEntry],
    total_teams: usize,
    fetched_teams: usize,
    denominator: String,
    ownership: Vec<StatRow>,
    captains: Vec<StatRow>,
    vice_captains: Vec<StatRow>,
    transfers_in: Vec<StatRow>,
    transfers_out: Vec<StatRow>,
    failures: &'a [TeamFailure],
    unresolved_player_ids: Vec<PlayerId>,
}

fn top_rows(stats: &LeagueStats, kind: StatKind, denominator: Denominator, top: Option<usize>) -> Vec<StatRow> {
    let mut rows = stats.rows(kind, denominator);
    if let Some(k) = top {
        rows.truncate(k);
    }
    rows
}

pub fn report_json(report: &LeagueReport, denominator: Denominator, top: Option<usize>) -> Result<String> {
    let stats = &report.stats;
    let body = LeagueJson {
        league_id: report.league.id,
        league_name: &report.league.name,
        standings: &report.league.standings,
        total_teams: stats.total_teams,
        fetched_teams: stats.fetched_teams,
        denominator: denominator.to_string(),
        ownership: top_rows(stats, StatKind::Ownership, denominator, top),
        captains: top_rows(stats, StatKind::Captaincy, denominator, top),
        vice_captains: top_rows(stats, StatKind::ViceCaptaincy, denominator, top),
        transfers_in: top_rows(stats, StatKind::TransfersIn, denominator, top),
        transfers_out: top_rows(stats, StatKind::TransfersOut, denominator, top),
        failures: &stats.failures,
        unresolved_player_ids: stats.unresolved.iter().copied().collect(),
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn report_text(report: &LeagueReport, denominator: Denominator, top: Option<usize>) -> String {
    let mut out = format!("{} (ID: {})\n\n", report.league.name, report.league.id);
    out.push_str(&render::standings_table(&report.league.standings));
    for kind in StatKind::ALL {
        out.push('\n');
        out.push_str(&render::stat_table(&report.stats, kind, denominator, top));
    }
    out
}

/// Handle the league command
pub async fn handle_league(params: LeagueParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;

    // tarpaulin::skip - HTTP/file I/O, tested via integration tests
    let session = Session::new(FplClient::new()?);
    let mut history = HistoryStore::open(FileStore::default_location());
    let config = AggregatorConfig {
        concurrency: params.concurrency,
    };

    eprintln!("Fetching league standings..."); // tarpaulin::skip
    let report =
        load_league_report(&session, &mut history, league_id, config, &mut StatusProgress).await?;

    if params.as_json {
        println!("{}", report_json(&report, params.denominator, params.top)?); // tarpaulin::skip
    } else {
        print!("{}", report_text(&report, params.denominator, params.top)); // tarpaulin::skip
    }

    for warning in completeness_warnings(&report.stats) {
        eprintln!("⚠ {}", warning); // tarpaulin::skip
    }

    Ok(())
}
