//! Session-scoped cache of the bootstrap reference data.
//!
//! The bootstrap payload is large and changes slowly, so it is fetched once
//! per [`Session`] and shared read-only by everything that resolves player
//! ids. [`Session::invalidate`] drops it; the next [`Session::load`] fetches a
//! fresh copy.

use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{
    cli::types::{GameweekId, PlayerId},
    error::FplError,
    fpl::{http::FplApi, types::BootstrapResponse},
    Result,
};

/// Placeholder name for player ids missing from the reference data.
pub const UNKNOWN_PLAYER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
    pub club: Option<String>,
}

/// Immutable snapshot built from `/bootstrap-static/`.
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    players: HashMap<PlayerId, PlayerInfo>,
    current_gameweek: Option<GameweekId>,
}

impl Bootstrap {
    pub fn from_response(raw: BootstrapResponse) -> Self {
        let clubs: HashMap<u32, String> = raw
            .teams
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();

        let players = raw
            .elements
            .into_iter()
            .filter_map(|el| {
                let name = el.web_name?;
                let club = el.team.and_then(|id| clubs.get(&id).cloned());
                Some((el.id, PlayerInfo { id: el.id, name, club }))
            })
            .collect();

        let mut current = raw.events.iter().filter(|ev| ev.is_current);
        let current_gameweek = current.next().map(|ev| ev.id);
        if current.next().is_some() {
            warn!(?current_gameweek, "more than one gameweek flagged current, using the first");
        }

        Self {
            players,
            current_gameweek,
        }
    }

    /// The gameweek flagged current, if the season is running.
    pub fn current_gameweek(&self) -> Option<GameweekId> {
        self.current_gameweek
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerInfo> {
        self.players.get(&id)
    }

    /// Display name for `id`, or `None` when the id is not in the reference data.
    pub fn resolve(&self, id: PlayerId) -> Option<&str> {
        self.players.get(&id).map(|p| p.name.as_str())
    }

    /// Display name for `id`, falling back to [`UNKNOWN_PLAYER`].
    pub fn player_name(&self, id: PlayerId) -> &str {
        self.resolve(id).unwrap_or(UNKNOWN_PLAYER)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&PlayerInfo> {
        let wanted = name.trim().to_lowercase();
        self.players
            .values()
            .filter(|p| p.name.to_lowercase() == wanted)
            .min_by_key(|p| p.id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Owns the API handle and the one bootstrap snapshot of a session.
pub struct Session<A> {
    api: A,
    bootstrap: RwLock<Option<Arc<Bootstrap>>>,
}

impl<A: FplApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bootstrap: RwLock::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Return the cached snapshot, fetching it first if none is held.
    ///
    /// On failure nothing is cached, so a later call tries again.
    pub async fn load(&self) -> Result<Arc<Bootstrap>> {
        if let Some(cached) = self.bootstrap.read().await.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let mut slot = self.bootstrap.write().await;
        // another task may have loaded while we waited for the write lock
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let raw = self.api.bootstrap().await.map_err(|e| FplError::Bootstrap {
            message: e.to_string(),
        })?;
        let snapshot = Arc::new(Bootstrap::from_response(raw));
        info!(
            players = snapshot.player_count(),
            gameweek = ?snapshot.current_gameweek(),
            "bootstrap data loaded"
        );

        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot.
    pub async fn invalidate(&self) {
        self.bootstrap.write().await.take();
    }

    /// Drop the cached snapshot and fetch a fresh one.
    pub async fn reload(&self) -> Result<Arc<Bootstrap>> {
        self.invalidate().await;
        self.load().await
    }

    pub async fn is_loaded(&self) -> bool {
        self.bootstrap.read().await.is_some()
    }
}
