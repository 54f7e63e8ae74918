//! League-wide aggregation of every team's picks and transfers.
//!
//! [`team_results`] turns a standings list into a lazy stream of per-team
//! outcomes; [`LeagueAggregator::aggregate`] folds that stream into
//! [`LeagueStats`] while reporting progress to a [`ProgressObserver`].

use futures::{stream, Stream, StreamExt};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::{
    cli::types::{Denominator, PlayerId, TeamId},
    fpl::{bootstrap::Session, http::FplApi, roster::TeamData, types::StandingEntry},
    stats::counter::Counter,
};


/// What happened when one team was fetched
#[derive(Debug, Clone, PartialEq)]
pub enum TeamOutcome {
    Fetched(TeamData),
    Failed { reason: String },
}

/// One item of the per-team result stream
#[derive(Debug, Clone)]
pub struct TeamResult {
    /// 1-based position in the standings
    pub index: usize,
    pub total: usize,
    pub entry: StandingEntry,
    pub outcome: TeamOutcome,
}

/// Receives aggregation progress. All methods default to doing nothing.
pub trait ProgressObserver {
    fn on_start(&mut self, _total: usize) {}

    fn on_team(&mut self, _result: &TeamResult) {}

    fn on_finish(&mut self, _stats: &LeagueStats) {}
}

/// Observer that ignores every event
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamFailure {
    pub team_id: TeamId,
    pub entry_name: String,
    pub reason: String,
}

/// The five frequency tables of a league, plus bookkeeping about how
/// complete they are.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueStats {
    pub ownership: Counter<String>,
    pub captains: Counter<String>,
    pub vice_captains: Counter<String>,
    pub transfers_in: Counter<String>,
    pub transfers_out: Counter<String>,
    /// Every entry in the standings
    pub total_teams: usize,
    /// Entries whose picks and transfers were fetched
    pub fetched_teams: usize,
    pub failures: Vec<TeamFailure>,
    /// Player ids that were counted under "Unknown"
    pub unresolved: BTreeSet<PlayerId>,
    /// Player name → names of the entries holding that player
    pub owners: BTreeMap<String, Vec<String>>,
}

/// Selects one of the five tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Ownership,
    Captaincy,
    ViceCaptaincy,
    TransfersIn,
    TransfersOut,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Ownership,
        StatKind::Captaincy,
        StatKind::ViceCaptaincy,
        StatKind::TransfersIn,
        StatKind::TransfersOut,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatKind::Ownership => "Player Ownership",
            StatKind::Captaincy => "Captain Choices",
            StatKind::ViceCaptaincy => "Vice Captain Choices",
            StatKind::TransfersIn => "Transfers In",
            StatKind::TransfersOut => "Transfers Out",
        }
    }

    /// Transfers are shown as raw counts, the rest as a share of teams.
    pub fn is_percentage(&self) -> bool {
        !matches!(self, StatKind::TransfersIn | StatKind::TransfersOut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub player: String,
    pub count: u32,
    pub percentage: f64,
}

impl LeagueStats {
    pub fn new(total_teams: usize) -> Self {
        Self {
            total_teams,
            ..Default::default()
        }
    }

    /// Fold one team's outcome in. Failed teams are recorded, not counted.
    pub fn record(&mut self, result: TeamResult) {
        match result.outcome {
            TeamOutcome::Fetched(data) => self.add_team(&result.entry, &data),
            TeamOutcome::Failed { reason } => self.failures.push(TeamFailure {
                team_id: result.entry.entry,
                entry_name: result.entry.entry_name,
                reason,
            }),
        }
    }

    pub fn add_team(&mut self, entry: &StandingEntry, data: &TeamData) {
        self.fetched_teams += 1;

        for pick in &data.picks {
            self.ownership.increment(pick.player.clone());
            if pick.is_captain {
                self.captains.increment(pick.player.clone());
            }
            if pick.is_vice_captain {
                self.vice_captains.increment(pick.player.clone());
            }
            // several picks may share a name ("Unknown"); list the team once
            let owners = self.owners.entry(pick.player.clone()).or_default();
            if owners.last() != Some(&entry.entry_name) {
                owners.push(entry.entry_name.clone());
            }
        }

        for transfer in &data.transfers {
            self.transfers_in.increment(transfer.player_in.clone());
            self.transfers_out.increment(transfer.player_out.clone());
        }

        self.unresolved.extend(data.unresolved.iter().copied());
    }

    pub fn counter(&self, kind: StatKind) -> &Counter<String> {
        match kind {
            StatKind::Ownership => &self.ownership,
            StatKind::Captaincy => &self.captains,
            StatKind::ViceCaptaincy => &self.vice_captains,
            StatKind::TransfersIn => &self.transfers_in,
            StatKind::TransfersOut => &self.transfers_out,
        }
    }

    pub fn denominator(&self, denominator: Denominator) -> usize {
        match denominator {
            Denominator::Total => self.total_teams,
            Denominator::Fetched => self.fetched_teams,
        }
    }

    /// `count` as a percentage of the chosen team count; 0.0 when there are
    /// no teams.
    pub fn percentage(&self, count: u32, denominator: Denominator) -> f64 {
        match self.denominator(denominator) {
            0 => 0.0,
            teams => f64::from(count) * 100.0 / teams as f64,
        }
    }

    /// Rows of one table, highest count first.
    pub fn rows(&self, kind: StatKind, denominator: Denominator) -> Vec<StatRow> {
        self.counter(kind)
            .to_sorted_vec()
            .into_iter()
            .map(|(player, count)| StatRow {
                percentage: self.percentage(count, denominator),
                player,
                count,
            })
            .collect()
    }

    /// True when every standings entry contributed and every id resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
            && self.unresolved.is_empty()
            && self.fetched_teams == self.total_teams
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Teams fetched at once; 1 processes the standings strictly in order.
    pub concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Lazy, finite stream of per-team outcomes in standings order.
///
/// Nothing is fetched until the stream is polled. At most `concurrency`
/// teams are in flight, and results are yielded in standings order
/// regardless of which request finishes first.
pub fn team_results<'a, A>(
    session: &'a Session<A>,
    standings: &'a [StandingEntry],
    concurrency: usize,
) -> impl Stream<Item = TeamResult> + 'a
where
    A: FplApi + 'a,
{
    let total = standings.len();
    stream::iter(standings.iter().enumerate())
        .map(move |(i, entry)| async move {
            let outcome = match session.fetch_team_data(entry.entry).await {
                Ok(data) => TeamOutcome::Fetched(data),
                Err(e) => {
                    warn!(team = %entry.entry, entry_name = %entry.entry_name, error = %e, "skipping team");
                    TeamOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            TeamResult {
                index: i + 1,
                total,
                entry: entry.clone(),
                outcome,
            }
        })
        .buffered(concurrency.max(1))
}

pub struct LeagueAggregator<'s, A> {
    session: &'s Session<A>,
    config: AggregatorConfig,
}

impl<'s, A: FplApi + 's> LeagueAggregator<'s, A> {
    pub fn new(session: &'s Session<A>) -> Self {
        Self {
            session,
            config: AggregatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn team_results(
        &self,
        standings: &'s [StandingEntry],
    ) -> impl Stream<Item = TeamResult> + 's {
        team_results(self.session, standings, self.config.concurrency)
    }

    /// Fetch every team in `standings` and count picks, captaincy and
    /// current-gameweek transfers by player name.
    ///
    /// `total_teams` is the standings length; teams that fail to fetch are
    /// listed in `failures` and excluded from `fetched_teams`.
    pub async fn aggregate(
        &self,
        standings: &'s [StandingEntry],
        observer: &mut dyn ProgressObserver,
    ) -> LeagueStats {
        observer.on_start(standings.len());

        let mut stats = LeagueStats::new(standings.len());
        let mut results = std::pin::pin!(self.team_results(standings));
        while let Some(result) = results.next().await {
            observer.on_team(&result);
            stats.record(result);
        }

        observer.on_finish(&stats);
        stats
    }
}
