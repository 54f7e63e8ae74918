//! Command implementations for the FPL league CLI

pub mod history;
pub mod league;
pub mod player;
pub mod render;
pub mod team;

use tracing::info;

use crate::{
    error::FplError,
    stats::{LeagueStats, ProgressObserver, TeamOutcome, TeamResult},
    LeagueId, Result, LEAGUE_ID_ENV_VAR,
};

/// Resolve league ID from option or environment variable.
///
/// A set but invalid environment value is reported as invalid rather than
/// missing.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.parse(),
        Err(_) => Err(FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Prints "Fetching team N/total" status lines to stderr as teams complete.
pub struct StatusProgress;

impl ProgressObserver for StatusProgress {
    fn on_start(&mut self, total: usize) {
        eprintln!("Fetching league player picks ({} teams)...", total); // tarpaulin::skip
    }

    fn on_team(&mut self, result: &TeamResult) {
        // tarpaulin::skip - console output
        match &result.outcome {
            TeamOutcome::Fetched(_) => eprintln!(
                "✓ [{}/{}] {}",
                result.index, result.total, result.entry.entry_name
            ),
            TeamOutcome::Failed { reason } => eprintln!(
                "⚠ [{}/{}] {} skipped: {}",
                result.index, result.total, result.entry.entry_name, reason
            ),
        }
    }

    fn on_finish(&mut self, stats: &LeagueStats) {
        info!(
            fetched = stats.fetched_teams,
            total = stats.total_teams,
            failed = stats.failures.len(),
            unresolved = stats.unresolved.len(),
            "league aggregation finished"
        );
    }
}

/// Warnings for data that could not be fully resolved, one line each.
pub fn completeness_warnings(stats: &LeagueStats) -> Vec<String> {
    if stats.is_complete() {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    if !stats.failures.is_empty() {
        let names: Vec<&str> = stats
            .failures
            .iter()
            .map(|f| f.entry_name.as_str())
            .collect();
        warnings.push(format!(
            "{} of {} teams could not be fetched: {}",
            stats.failures.len(),
            stats.total_teams,
            names.join(", ")
        ));
    }
    if !stats.unresolved.is_empty() {
        let ids: Vec<String> = stats.unresolved.iter().map(|id| id.to_string()).collect();
        warnings.push(format!(
            "{} player id(s) missing from game data, counted as \"Unknown\": {}",
            ids.len(),
            ids.join(", ")
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::{PlayerId, TeamId},
        stats::TeamFailure,
    };

    #[test]
    fn test_resolve_league_id_prefers_explicit_value() {
        let id = resolve_league_id(Some(LeagueId::new(12345))).unwrap();
        assert_eq!(id.as_u32(), 12345);
    }

    #[test]
    fn test_completeness_warnings_empty_when_complete() {
        let mut stats = LeagueStats::new(3);
        stats.fetched_teams = 3;
        assert!(stats.is_complete());
        assert!(completeness_warnings(&stats).is_empty());
    }

    #[test]
    fn test_completeness_warnings_lists_failures_and_unresolved() {
        let mut stats = LeagueStats::new(3);
        stats.failures.push(TeamFailure {
            team_id: TeamId::new(2),
            entry_name: "Slow FC".to_string(),
            reason: "HTTP request failed".to_string(),
        });
        stats.unresolved.insert(PlayerId::new(900));
        stats.unresolved.insert(PlayerId::new(901));

        let warnings = completeness_warnings(&stats);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("1 of 3 teams"));
        assert!(warnings[0].contains("Slow FC"));
        assert!(warnings[1].contains("900, 901"));
    }
}
