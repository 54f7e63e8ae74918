//! Per-team roster and transfer retrieval.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::{
    cli::types::{GameweekId, PlayerId, TeamId},
    error::FplError,
    fpl::{
        bootstrap::{Bootstrap, Session, UNKNOWN_PLAYER},
        http::FplApi,
        types::{PicksResponse, RawTransfer},
    },
    Result,
};

/// One roster slot with its player resolved to a name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    /// Board position: 1-11 starting, 12-15 bench
    pub position: u8,
    pub player: String,
    pub player_id: Option<PlayerId>,
    pub multiplier: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl Pick {
    pub fn role(&self) -> &'static str {
        if self.is_captain {
            "Captain"
        } else if self.is_vice_captain {
            "Vice Captain"
        } else {
            ""
        }
    }
}

/// A transfer made for the current gameweek
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    pub player_in: String,
    pub player_out: String,
    pub element_in: Option<PlayerId>,
    pub element_out: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamData {
    pub team_id: TeamId,
    pub gameweek: GameweekId,
    pub active_chip: Option<String>,
    pub picks: Vec<Pick>,
    pub transfers: Vec<Transfer>,
    /// Player ids that were not in the bootstrap data and were named "Unknown"
    pub unresolved: BTreeSet<PlayerId>,
}

impl<A: FplApi> Session<A> {
    /// Fetch a team's picks and transfers for the current gameweek.
    ///
    /// Picks and transfers are requested concurrently and both must succeed;
    /// there is no partial result.
    pub async fn fetch_team_data(&self, team_id: TeamId) -> Result<TeamData> {
        let bootstrap = self.load().await?;
        let gameweek = bootstrap
            .current_gameweek()
            .ok_or(FplError::NoCurrentGameweek)?;

        let api = self.api();
        let (picks, transfers) =
            tokio::try_join!(api.picks(team_id, gameweek), api.transfers(team_id))?;

        let data = build_team_data(&bootstrap, team_id, gameweek, picks, transfers);
        debug!(
            team = %team_id,
            picks = data.picks.len(),
            transfers = data.transfers.len(),
            unresolved = data.unresolved.len(),
            "team data fetched"
        );
        Ok(data)
    }
}

/// Resolve raw picks and transfers against `bootstrap`, keeping only the
/// transfers made for `gameweek`.
pub fn build_team_data(
    bootstrap: &Bootstrap,
    team_id: TeamId,
    gameweek: GameweekId,
    picks: PicksResponse,
    transfers: Vec<RawTransfer>,
) -> TeamData {
    let mut unresolved = BTreeSet::new();
    // A record without an id is named "Unknown" but has nothing to report.
    let mut name_of = |id: Option<PlayerId>| match id {
        Some(id) => match bootstrap.resolve(id) {
            Some(name) => name.to_string(),
            None => {
                unresolved.insert(id);
                UNKNOWN_PLAYER.to_string()
            }
        },
        None => UNKNOWN_PLAYER.to_string(),
    };

    let mut resolved_picks = Vec::with_capacity(picks.picks.len());
    for raw in picks.picks {
        resolved_picks.push(Pick {
            position: raw.position,
            player: name_of(raw.element),
            player_id: raw.element,
            multiplier: raw.multiplier,
            is_captain: raw.is_captain,
            is_vice_captain: raw.is_vice_captain,
        });
    }

    let mut resolved_transfers = Vec::new();
    for raw in transfers.into_iter().filter(|t| t.event == Some(gameweek)) {
        resolved_transfers.push(Transfer {
            player_out: name_of(raw.element_out),
            player_in: name_of(raw.element_in),
            element_in: raw.element_in,
            element_out: raw.element_out,
        });
    }

    TeamData {
        team_id,
        gameweek,
        active_chip: picks.active_chip,
        picks: resolved_picks,
        transfers: resolved_transfers,
        unresolved,
    }
}
