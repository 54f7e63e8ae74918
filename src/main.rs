//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use fpl_league::{
    cli::{Commands, FplCli},
    commands::{
        history::handle_history,
        league::{handle_league, LeagueParams},
        player::handle_player,
        team::handle_team,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FplCli::parse();

    let default_level = if app.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::League {
            league_id,
            output,
            denominator,
            concurrency,
        } => {
            handle_league(LeagueParams {
                league_id,
                as_json: output.json,
                top: output.top,
                denominator,
                concurrency,
            })
            .await?
        }

        Commands::Team { team_id, json } => handle_team(team_id, json).await?,

        Commands::Player {
            league_id,
            name,
            json,
            denominator,
        } => handle_player(league_id, name, json, denominator).await?,

        Commands::History { cmd } => handle_history(cmd)?,
    }

    Ok(())
}
