//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Denominator, LeagueId, TeamId};

/// Output options shared between commands
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as JSON instead of text tables.
    #[clap(long)]
    pub json: bool,

    /// Only show the top K rows of each stat table.
    #[clap(long, short = 'k')]
    pub top: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCmd {
    /// Show recently viewed leagues, most recent first
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Remove a league from the history
    Remove {
        #[clap(long, short)]
        league_id: LeagueId,
    },

    /// Forget every league in the history
    Clear,
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-league",
    about = "Fantasy Premier League mini-league statistics"
)]
pub struct FplCli {
    /// Show info-level progress logs on stderr (RUST_LOG overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a classic league: standings plus ownership, captaincy and transfer tables.
    ///
    /// Every team's picks and transfers for the current gameweek are fetched
    /// and folded into league-wide counts.
    League {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        output: OutputOptions,

        /// Divide percentages by all standings entries or only by teams that were fetched.
        #[clap(long, value_enum, default_value_t = Denominator::default())]
        denominator: Denominator,

        /// Number of teams fetched at once (1 keeps the league order strictly sequential).
        #[clap(long, default_value_t = 1)]
        concurrency: usize,
    },

    /// Show one team's picks and current-gameweek transfers.
    Team {
        /// Team (entry) ID, as shown in the league standings.
        #[clap(long, short)]
        team_id: TeamId,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },

    /// Show how a single player is owned, captained and transferred within a league.
    Player {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Player display name, e.g. `Salah` (case-insensitive).
        #[clap(long, short)]
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Divide percentages by all standings entries or only by teams that were fetched.
        #[clap(long, value_enum, default_value_t = Denominator::default())]
        denominator: Denominator,
    },

    /// Inspect or edit the recently viewed leagues.
    History {
        #[clap(subcommand)]
        cmd: HistoryCmd,
    },
}
