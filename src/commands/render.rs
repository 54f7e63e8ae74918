//! Plain-text tables for terminal output.

use std::fmt::Write;

use crate::{
    cli::types::Denominator,
    core::HistoryEntry,
    fpl::{types::StandingEntry, TeamData},
    stats::{LeagueStats, StatKind},
};

/// `12.5%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

pub fn standings_table(standings: &[StandingEntry]) -> String {
    let team_w = column_width("Team Name", standings.iter().map(|e| e.entry_name.as_str()));
    let mgr_w = column_width("Manager", standings.iter().map(|e| e.player_name.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<team_w$}  {:<mgr_w$}  {:>12}",
        "Rank", "Team Name", "Manager", "Total Points"
    );
    for e in standings {
        let _ = writeln!(
            out,
            "{:>5}  {:<team_w$}  {:<mgr_w$}  {:>12}",
            e.rank, e.entry_name, e.player_name, e.total
        );
    }
    out
}

pub fn stat_table(
    stats: &LeagueStats,
    kind: StatKind,
    denominator: Denominator,
    top: Option<usize>,
) -> String {
    let mut rows = stats.rows(kind, denominator);
    if let Some(k) = top {
        rows.truncate(k);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", kind.title());
    if rows.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }

    let player_w = column_width("Player", rows.iter().map(|r| r.player.as_str()));
    let header = if kind.is_percentage() { "%" } else { "Count" };
    let _ = writeln!(out, "  {:<player_w$}  {:>7}", "Player", header);
    for row in rows {
        let value = if kind.is_percentage() {
            format_percentage(row.percentage)
        } else {
            row.count.to_string()
        };
        let _ = writeln!(out, "  {:<player_w$}  {:>7}", row.player, value);
    }
    out
}

pub fn team_table(data: &TeamData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Team {} - Gameweek {}", data.team_id, data.gameweek);
    if let Some(chip) = &data.active_chip {
        let _ = writeln!(out, "Active chip: {}", chip);
    }

    let player_w = column_width("Player", data.picks.iter().map(|p| p.player.as_str()));
    let _ = writeln!(out, "{:>8}  {:<player_w$}  Role", "Position", "Player");
    for pick in &data.picks {
        let _ = writeln!(
            out,
            "{:>8}  {:<player_w$}  {}",
            pick.position,
            pick.player,
            pick.role()
        );
    }

    if !data.transfers.is_empty() {
        let out_w = column_width(
            "Player Out",
            data.transfers.iter().map(|t| t.player_out.as_str()),
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Transfers");
        let _ = writeln!(out, "  {:<out_w$}  Player In", "Player Out");
        for t in &data.transfers {
            let _ = writeln!(out, "  {:<out_w$}  {}", t.player_out, t.player_in);
        }
    }
    out
}

pub fn history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No recent leagues\n".to_string();
    }

    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{:>10}  {}  (last viewed {})",
            e.id,
            e.name,
            e.last_accessed.format("%Y-%m-%d %H:%M UTC")
        );
    }
    out
}
