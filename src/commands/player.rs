//! Player command: one player's standing within a league

use serde::Serialize;
use std::fmt::Write;

use crate::{
    cli::types::Denominator,
    core::{FileStore, HistoryStore},
    error::FplError,
    fpl::{Bootstrap, FplClient, Session},
    stats::{AggregatorConfig, LeagueStats},
    LeagueId, Result,
};

use super::{
    completeness_warnings, league::load_league_report, render::format_percentage,
    resolve_league_id, StatusProgress,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDetail {
    pub name: String,
    pub club: Option<String>,
    pub owned_by: u32,
    pub ownership_pct: f64,
    pub captained_by: u32,
    pub captaincy_pct: f64,
    pub vice_captained_by: u32,
    pub vice_captaincy_pct: f64,
    pub transfers_in: u32,
    pub transfers_out: u32,
    /// Entries holding the player, in standings order
    pub owners: Vec<String>,
}

/// Look `name` up (case-insensitive) in the league stats, falling back to the
/// bootstrap data for players nobody in the league owns.
pub fn player_detail(
    stats: &LeagueStats,
    bootstrap: &Bootstrap,
    name: &str,
    denominator: Denominator,
) -> Result<PlayerDetail> {
    let wanted = name.trim().to_lowercase();
    let in_league = stats
        .owners
        .keys()
        .chain(stats.transfers_in.iter().map(|(k, _)| k))
        .chain(stats.transfers_out.iter().map(|(k, _)| k))
        .find(|k| k.to_lowercase() == wanted)
        .cloned();
    let known = bootstrap.find_by_name(name);

    let canonical = match (in_league, known) {
        (Some(n), _) => n,
        (None, Some(info)) => info.name.clone(),
        (None, None) => {
            return Err(FplError::PlayerNotFound {
                name: name.to_string(),
            })
        }
    };

    let owned_by = stats.ownership.get(canonical.as_str());
    let captained_by = stats.captains.get(canonical.as_str());
    let vice_captained_by = stats.vice_captains.get(canonical.as_str());

    Ok(PlayerDetail {
        club: bootstrap.find_by_name(&canonical).and_then(|p| p.club.clone()),
        owned_by,
        ownership_pct: stats.percentage(owned_by, denominator),
        captained_by,
        captaincy_pct: stats.percentage(captained_by, denominator),
        vice_captained_by,
        vice_captaincy_pct: stats.percentage(vice_captained_by, denominator),
        transfers_in: stats.transfers_in.get(canonical.as_str()),
        transfers_out: stats.transfers_out.get(canonical.as_str()),
        owners: stats.owners.get(&canonical).cloned().unwrap_or_default(),
        name: canonical,
    })
}

pub fn detail_text(detail: &PlayerDetail) -> String {
    let mut out = String::new();
    match &detail.club {
        Some(club) => {
            let _ = writeln!(out, "{} ({})", detail.name, club);
        }
        None => {
            let _ = writeln!(out, "{}", detail.name);
        }
    }
    let _ = writeln!(
        out,
        "  Owned by:        {} ({})",
        detail.owned_by,
        format_percentage(detail.ownership_pct)
    );
    let _ = writeln!(
        out,
        "  Captained by:    {} ({})",
        detail.captained_by,
        format_percentage(detail.captaincy_pct)
    );
    let _ = writeln!(
        out,
        "  Vice captain of: {} ({})",
        detail.vice_captained_by,
        format_percentage(detail.vice_captaincy_pct)
    );
    let _ = writeln!(out, "  Transfers in:    {}", detail.transfers_in);
    let _ = writeln!(out, "  Transfers out:   {}", detail.transfers_out);
    if !detail.owners.is_empty() {
        let _ = writeln!(out, "  Owners: {}", detail.owners.join(", "));
    }
    out
}

/// Handle the player command
pub async fn handle_player(
    league_id: Option<LeagueId>,
    name: String,
    as_json: bool,
    denominator: Denominator,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;

    // tarpaulin::skip - HTTP/file I/O, tested via integration tests
    let session = Session::new(FplClient::new()?);
    let mut history = HistoryStore::open(FileStore::default_location());

    let report = load_league_report(
        &session,
        &mut history,
        league_id,
        AggregatorConfig::default(),
        &mut StatusProgress,
    )
    .await?;
    let bootstrap = session.load().await?;
    let detail = player_detail(&report.stats, &bootstrap, &name, denominator)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?); // tarpaulin::skip
    } else {
        print!("{}", detail_text(&detail)); // tarpaulin::skip
    }

    for warning in completeness_warnings(&report.stats) {
        eprintln!("⚠ {}", warning); // tarpaulin::skip
    }

    Ok(())
}
