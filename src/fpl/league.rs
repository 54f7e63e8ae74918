//! Classic league standings, all pages.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::types::LeagueId,
    fpl::{http::FplApi, types::StandingEntry},
    Result,
};

#[derive(Debug, Clone, Serialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub standings: Vec<StandingEntry>,
}

/// Fetch every standings page of a classic league, in rank order.
///
/// A page that reports `has_next` but carries no rows ends the walk, so a
/// misbehaving server cannot keep us paging forever.
pub async fn fetch_league<A: FplApi + ?Sized>(api: &A, league_id: LeagueId) -> Result<League> {
    let mut page = 1;
    let first = api.standings_page(league_id, page).await?;
    let name = first.league.name;
    let mut standings = first.standings.results;
    let mut has_next = first.standings.has_next;

    while has_next {
        page += 1;
        let next = api.standings_page(league_id, page).await?;
        debug!(league = %league_id, page, rows = next.standings.results.len(), "standings page");
        if next.standings.results.is_empty() {
            break;
        }
        standings.extend(next.standings.results);
        has_next = next.standings.has_next;
    }

    info!(league = %league_id, %name, teams = standings.len(), pages = page, "league standings loaded");
    Ok(League {
        id: league_id,
        name,
        standings,
    })
}
