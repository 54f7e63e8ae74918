//! Team command implementation

use crate::{
    cli::types::TeamId,
    fpl::{FplClient, Session},
    Result,
};

use super::render;

/// Handle the team command: one team's picks and current-gameweek transfers.
pub async fn handle_team(team_id: TeamId, as_json: bool) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via integration tests
    let session = Session::new(FplClient::new()?);

    eprintln!("Loading team details..."); // tarpaulin::skip
    let data = session.fetch_team_data(team_id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&data)?); // tarpaulin::skip
    } else {
        print!("{}", render::team_table(&data)); // tarpaulin::skip
        if !data.unresolved.is_empty() {
            eprintln!(
                "⚠ {} player id(s) missing from game data, shown as \"Unknown\"",
                data.unresolved.len()
            ); // tarpaulin::skip
        }
    }

    Ok(())
}
