//! Recently viewed leagues, most recent first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{cli::types::LeagueId, core::cache::KeyValueStore, Result};

/// Key the history is persisted under.
pub const HISTORY_KEY: &str = "league_history";

/// Maximum number of leagues remembered.
pub const MAX_HISTORY: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: LeagueId,
    pub name: String,
    pub last_accessed: DateTime<Utc>,
}

/// Bounded most-recently-used list of leagues backed by a [`KeyValueStore`].
///
/// Invariants: at most [`MAX_HISTORY`] entries and no two entries share an id.
pub struct HistoryStore<S> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load the persisted history; missing or malformed data starts empty.
    pub fn open(store: S) -> Self {
        let entries = store
            .get(HISTORY_KEY)
            .map(|raw| parse_history(&raw))
            .unwrap_or_default();
        debug!(entries = entries.len(), "league history loaded");
        Self { store, entries }
    }

    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Move `id` to the front (inserting it if new) stamped with the current time.
    pub fn add(&mut self, id: LeagueId, name: impl Into<String>) -> Result<()> {
        self.add_at(id, name, Utc::now())
    }

    pub fn add_at(
        &mut self,
        id: LeagueId,
        name: impl Into<String>,
        last_accessed: DateTime<Utc>,
    ) -> Result<()> {
        self.entries.retain(|e| e.id != id);
        self.entries.insert(
            0,
            HistoryEntry {
                id,
                name: name.into(),
                last_accessed,
            },
        );
        self.entries.truncate(MAX_HISTORY);
        self.save()
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: LeagueId) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(HISTORY_KEY)
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &raw)
    }
}

/// Decode a persisted history. Malformed input yields an empty list; valid
/// input is trimmed back to the store's invariants.
pub fn parse_history(raw: &str) -> Vec<HistoryEntry> {
    let parsed: Vec<HistoryEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "ignoring malformed league history");
            return Vec::new();
        }
    };

    let mut entries: Vec<HistoryEntry> = Vec::with_capacity(MAX_HISTORY);
    for entry in parsed {
        if entries.len() == MAX_HISTORY {
            break;
        }
        if entries.iter().all(|e| e.id != entry.id) {
            entries.push(entry);
        }
    }
    entries
}
