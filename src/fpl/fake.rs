//! In-memory `FplApi` used by unit tests.

use async_trait::async_trait;
use serde_json::json;
use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    cli::types::{GameweekId, LeagueId, PlayerId, TeamId},
    fpl::{
        http::FplApi,
        types::{
            BootstrapResponse, LeagueInfo, PicksResponse, RawPick, RawTransfer, StandingEntry,
            StandingsPage, StandingsResponse,
        },
    },
    FplError, Result,
};

/// Known players: ids 1..=20 are named `Player1`..`Player20`, 328 is Salah.
pub const SALAH: PlayerId = PlayerId(328);

pub fn fake_error(what: &str) -> FplError {
    let err = serde_json::from_str::<serde_json::Value>(&format!("<{what}>")).unwrap_err();
    FplError::Json(err)
}

pub fn entry(id: u32, name: &str) -> StandingEntry {
    StandingEntry {
        entry: TeamId::new(id),
        entry_name: name.to_string(),
        player_name: format!("Manager {id}"),
        rank: id,
        last_rank: id,
        total: 1000 - id as i32,
        event_total: 50,
    }
}

pub fn pick(element: u32, position: u8) -> RawPick {
    RawPick {
        element: Some(PlayerId::new(element)),
        position,
        multiplier: if position <= 11 { 1 } else { 0 },
        is_captain: false,
        is_vice_captain: false,
    }
}

/// Fifteen picks of players 1..=15 with player 1 captain and 2 vice.
pub fn squad() -> Vec<RawPick> {
    let mut picks: Vec<RawPick> = (1..=15).map(|n| pick(n, n as u8)).collect();
    picks[0].is_captain = true;
    picks[0].multiplier = 2;
    picks[1].is_vice_captain = true;
    picks
}

pub fn transfer(element_in: u32, element_out: u32, event: u16) -> RawTransfer {
    RawTransfer {
        element_in: Some(PlayerId::new(element_in)),
        element_out: Some(PlayerId::new(element_out)),
        event: Some(GameweekId::new(event)),
        time: None,
    }
}

#[derive(Default)]
pub struct FakeApi {
    current_gameweek: Option<u16>,
    failing_bootstrap: bool,
    league_name: String,
    standings: Vec<StandingEntry>,
    page_size: usize,
    picks: HashMap<TeamId, Vec<RawPick>>,
    transfers: HashMap<TeamId, Vec<RawTransfer>>,
    failing_teams: HashSet<TeamId>,
    failing_transfers: HashSet<TeamId>,
    bootstrap_calls: AtomicUsize,
    picks_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            league_name: "Test League".to_string(),
            page_size: 50,
            ..Default::default()
        }
    }

    pub fn with_current_gameweek(mut self, gw: u16) -> Self {
        self.current_gameweek = Some(gw);
        self
    }

    pub fn with_failing_bootstrap(mut self) -> Self {
        self.failing_bootstrap = true;
        self
    }

    pub fn with_standings(mut self, standings: Vec<StandingEntry>) -> Self {
        self.standings = standings;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_team(mut self, team: u32, picks: Vec<RawPick>, transfers: Vec<RawTransfer>) -> Self {
        self.picks.insert(TeamId::new(team), picks);
        self.transfers.insert(TeamId::new(team), transfers);
        self
    }

    pub fn with_failing_team(mut self, team: u32) -> Self {
        self.failing_teams.insert(TeamId::new(team));
        self
    }

    /// Picks succeed for `team` but its transfer log fails.
    pub fn with_failing_transfers(mut self, team: u32) -> Self {
        self.failing_transfers.insert(TeamId::new(team));
        self
    }

    pub fn bootstrap_calls(&self) -> usize {
        self.bootstrap_calls.load(Ordering::SeqCst)
    }

    pub fn picks_calls(&self) -> usize {
        self.picks_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FplApi for FakeApi {
    async fn bootstrap(&self) -> Result<BootstrapResponse> {
        self.bootstrap_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_bootstrap {
            return Err(fake_error("bootstrap"));
        }

        let mut elements: Vec<_> = (1..=20)
            .map(|n| json!({"id": n, "web_name": format!("Player{n}"), "team": 1}))
            .collect();
        elements.push(json!({"id": SALAH.0, "web_name": "Salah", "team": 12}));

        let events: Vec<_> = (1..=38)
            .map(|n| json!({"id": n, "is_current": Some(n) == self.current_gameweek}))
            .collect();

        Ok(serde_json::from_value(json!({
            "elements": elements,
            "teams": [{"id": 1, "name": "Arsenal"}, {"id": 12, "name": "Liverpool"}],
            "events": events
        }))?)
    }

    async fn standings_page(&self, league_id: LeagueId, page: u32) -> Result<StandingsResponse> {
        let size = self.page_size.max(1);
        let start = (page.saturating_sub(1) as usize) * size;
        let results: Vec<_> = self.standings.iter().skip(start).take(size).cloned().collect();

        Ok(StandingsResponse {
            league: LeagueInfo {
                id: league_id.as_u32(),
                name: self.league_name.clone(),
            },
            standings: StandingsPage {
                has_next: start + size < self.standings.len(),
                page,
                results,
            },
        })
    }

    async fn picks(&self, team_id: TeamId, gameweek: GameweekId) -> Result<PicksResponse> {
        self.picks_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_teams.contains(&team_id) {
            return Err(fake_error("picks"));
        }
        if Some(gameweek.as_u16()) != self.current_gameweek {
            return Err(fake_error("wrong gameweek"));
        }

        let picks = self
            .picks
            .get(&team_id)
            .cloned()
            .ok_or_else(|| fake_error("unknown team"))?;
        Ok(PicksResponse {
            picks,
            active_chip: None,
        })
    }

    async fn transfers(&self, team_id: TeamId) -> Result<Vec<RawTransfer>> {
        if self.failing_transfers.contains(&team_id) {
            return Err(fake_error("transfers"));
        }
        Ok(self.transfers.get(&team_id).cloned().unwrap_or_default())
    }
}
