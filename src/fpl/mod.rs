//! Fantasy Premier League API access: wire types, HTTP client, the
//! bootstrap session, per-team rosters, and league standings.

pub mod bootstrap;
pub mod http;
pub mod league;
pub mod roster;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use bootstrap::{Bootstrap, PlayerInfo, Session, UNKNOWN_PLAYER};
pub use http::{FplApi, FplClient, FPL_BASE_URL};
pub use league::{fetch_league, League};
pub use roster::{Pick, TeamData, Transfer};
