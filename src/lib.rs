//! Fantasy Premier League mini-league statistics
//!
//! A Rust library and CLI for the public Fantasy Premier League API. For a
//! classic league it fetches every member's picks and transfers for the
//! current gameweek and folds them into league-wide tables.
//!
//! ## Features
//!
//! - **Bootstrap Session**: reference data (players, clubs, gameweeks) loaded once per session
//! - **Roster Fetching**: picks and current-gameweek transfers per team, ids resolved to names
//! - **League Aggregation**: ownership, captaincy, vice-captaincy, transfers in and out
//! - **Progress Reporting**: a lazy per-team result stream with an observer hook
//! - **League History**: the five most recently viewed leagues, persisted locally
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_league::{
//!     fpl::{fetch_league, FplClient, Session},
//!     stats::{LeagueAggregator, NoProgress},
//!     LeagueId,
//! };
//!
//! # async fn example() -> fpl_league::Result<()> {
//! let session = Session::new(FplClient::new()?);
//! let league = fetch_league(session.api(), LeagueId::new(314)).await?;
//!
//! let stats = LeagueAggregator::new(&session)
//!     .aggregate(&league.standings, &mut NoProgress)
//!     .await;
//!
//! for (player, count) in stats.captains.to_sorted_vec() {
//!     println!("{player}: {count}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=314
//! ```
//! `FPL_BASE_URL` points the client at another API host and `FPL_DATA_DIR`
//! moves the league history file.

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Denominator, GameweekId, LeagueId, PlayerId, TeamId};
pub use error::{FplError, Result};
pub use stats::{Counter, LeagueStats};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";
pub const DATA_DIR_ENV_VAR: &str = "FPL_DATA_DIR";
