//! League statistics: frequency counters and the per-league aggregation.

pub mod aggregate;
pub mod counter;

pub use aggregate::{
    team_results, AggregatorConfig, LeagueAggregator, LeagueStats, NoProgress, ProgressObserver,
    StatKind, StatRow, TeamFailure, TeamOutcome, TeamResult,
};
pub use counter::Counter;
