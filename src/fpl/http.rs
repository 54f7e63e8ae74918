use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{GameweekId, LeagueId, TeamId},
    fpl::types::{BootstrapResponse, PicksResponse, RawTransfer, StandingsResponse},
    Result, BASE_URL_ENV_VAR,
};

#[cfg(test)]
mod tests;

/// Base path for the Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// The four read-only endpoints the client depends on.
///
/// `FplClient` is the production implementation; tests substitute an
/// in-memory source.
#[async_trait]
pub trait FplApi: Send + Sync {
    /// Global reference data: players, clubs, gameweeks.
    async fn bootstrap(&self) -> Result<BootstrapResponse>;

    /// One page (1-based) of a classic league's standings.
    async fn standings_page(&self, league_id: LeagueId, page: u32) -> Result<StandingsResponse>;

    /// A team's picks for one gameweek.
    async fn picks(&self, team_id: TeamId, gameweek: GameweekId) -> Result<PicksResponse>;

    /// A team's full transfer log, every gameweek.
    async fn transfers(&self, team_id: TeamId) -> Result<Vec<RawTransfer>>;
}

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Client against `FPL_BASE_URL` if set, otherwise the public API.
    pub fn new() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| FPL_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fpl-league/", env!("CARGO_PKG_VERSION")))
            .default_headers(common_headers())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

#[async_trait]
impl FplApi for FplClient {
    async fn bootstrap(&self) -> Result<BootstrapResponse> {
        self.get_json("/bootstrap-static/", &[]).await
    }

    async fn standings_page(&self, league_id: LeagueId, page: u32) -> Result<StandingsResponse> {
        let path = format!("/leagues-classic/{}/standings/", league_id);
        self.get_json(&path, &[("page_standings", page.to_string())])
            .await
    }

    async fn picks(&self, team_id: TeamId, gameweek: GameweekId) -> Result<PicksResponse> {
        let path = format!("/entry/{}/event/{}/picks/", team_id, gameweek);
        self.get_json(&path, &[]).await
    }

    async fn transfers(&self, team_id: TeamId) -> Result<Vec<RawTransfer>> {
        let path = format!("/entry/{}/transfers/", team_id);
        self.get_json(&path, &[]).await
    }
}
