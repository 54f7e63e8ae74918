//! Response shapes of the Fantasy Premier League API.
//!
//! The API is undocumented and owned by a third party, so fields carry
//! `#[serde(default)]`: a missing field degrades to an empty value instead of
//! failing the whole response. Standings rows without an entry id are dropped.

use crate::cli::types::{GameweekId, PlayerId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;


/// `GET /bootstrap-static/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BootstrapResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub teams: Vec<Club>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A player in the bootstrap data
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    #[serde(default)]
    pub web_name: Option<String>,
    /// Club id, see [`Club`]
    #[serde(default)]
    pub team: Option<u32>,
}

/// A Premier League club
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Club {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A gameweek
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: GameweekId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_current: bool,
}

/// `GET /leagues-classic/{id}/standings/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsResponse {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "rows_with_entry")]
    pub results: Vec<StandingEntry>,
}

fn first_page() -> u32 {
    1
}

/// A standings row as sent; rows without an `entry` cannot be fetched and are dropped.
#[derive(Deserialize)]
struct RawStandingRow {
    #[serde(default)]
    entry: Option<TeamId>,
    #[serde(default)]
    entry_name: String,
    #[serde(default)]
    player_name: String,
    #[serde(default)]
    rank: u32,
    #[serde(default)]
    last_rank: u32,
    #[serde(default)]
    total: i32,
    #[serde(default)]
    event_total: i32,
}

fn rows_with_entry<'de, D>(deserializer: D) -> std::result::Result<Vec<StandingEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Vec::<RawStandingRow>::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match row.entry {
            Some(entry) => Some(StandingEntry {
                entry,
                entry_name: row.entry_name,
                player_name: row.player_name,
                rank: row.rank,
                last_rank: row.last_rank,
                total: row.total,
                event_total: row.event_total,
            }),
            None => {
                warn!(entry_name = %row.entry_name, rank = row.rank, "standings row without entry id skipped");
                None
            }
        })
        .collect())
}

/// One row of the league table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingEntry {
    /// The team (entry) id used by the picks and transfers endpoints
    pub entry: TeamId,
    #[serde(default)]
    pub entry_name: String,
    /// Manager name
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub last_rank: u32,
    #[serde(default)]
    pub total: i32,
    #[serde(default)]
    pub event_total: i32,
}

/// `GET /entry/{team}/event/{gw}/picks/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PicksResponse {
    #[serde(default)]
    pub picks: Vec<RawPick>,
    #[serde(default)]
    pub active_chip: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPick {
    /// `None` when the record carries no player id; counted as "Unknown"
    #[serde(default)]
    pub element: Option<PlayerId>,
    #[serde(default)]
    pub position: u8,
    #[serde(default)]
    pub multiplier: u8,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

/// One row of `GET /entry/{team}/transfers/` (the endpoint returns a bare array)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTransfer {
    #[serde(default)]
    pub element_in: Option<PlayerId>,
    #[serde(default)]
    pub element_out: Option<PlayerId>,
    /// Gameweek the transfer was made for; older records may lack it
    #[serde(default)]
    pub event: Option<GameweekId>,
    #[serde(default)]
    pub time: Option<String>,
}
