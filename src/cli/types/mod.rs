//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod ids;

pub use ids::{GameweekId, LeagueId, PlayerId, TeamId};

/// Which team count ownership-style percentages are divided by.
///
/// `TotalTeams` is every entry in the standings, including teams whose
/// roster could not be fetched. `FetchedTeams` only counts teams that
/// contributed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Denominator {
    Total,
    #[default]
    Fetched,
}

impl std::fmt::Display for Denominator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denominator::Total => write!(f, "total"),
            Denominator::Fetched => write!(f, "fetched"),
        }
    }
}
