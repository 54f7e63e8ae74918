//! Unit tests for HTTP client functionality

use super::*;
use crate::{cli::types::PlayerId, FplError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_fpl_base_url_constant() {
        assert_eq!(FPL_BASE_URL, "https://fantasy.premierleague.com/api");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = FplClient::with_base_url("http://localhost:9999/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_bootstrap_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [{"id": 328, "web_name": "Salah", "team": 12}],
                "teams": [{"id": 12, "name": "Liverpool", "short_name": "LIV"}],
                "events": [{"id": 5, "is_current": true}]
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let bootstrap = client.bootstrap().await.unwrap();

        assert_eq!(bootstrap.elements[0].id, PlayerId::new(328));
        assert_eq!(bootstrap.events[0].id, GameweekId::new(5));
    }

    #[tokio::test]
    async fn test_standings_page_sends_page_parameter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/314/standings/"))
            .and(query_param("page_standings", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league": {"id": 314, "name": "Office League"},
                "standings": {"has_next": false, "page": 2, "results": []}
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let page = client.standings_page(LeagueId::new(314), 2).await.unwrap();

        assert_eq!(page.league.name, "Office League");
        assert_eq!(page.standings.page, 2);
    }

    #[tokio::test]
    async fn test_picks_path_includes_team_and_gameweek() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/555/event/7/picks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "picks": [{"element": 1, "position": 1, "multiplier": 2, "is_captain": true, "is_vice_captain": false}]
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let picks = client
            .picks(TeamId::new(555), GameweekId::new(7))
            .await
            .unwrap();

        assert_eq!(picks.picks.len(), 1);
        assert!(picks.picks[0].is_captain);
    }

    #[tokio::test]
    async fn test_transfers_bare_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/555/transfers/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"element_in": 1, "element_out": 2, "event": 7}
            ])))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let transfers = client.transfers(TeamId::new(555)).await.unwrap();

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].event, Some(GameweekId::new(7)));
    }

    #[tokio::test]
    async fn test_http_status_error_maps_to_http_variant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/999/standings/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let err = client
            .standings_page(LeagueId::new(999), 1)
            .await
            .unwrap_err();

        match err {
            FplError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_json_variant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/1/transfers/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let client = FplClient::with_base_url(mock_server.uri()).unwrap();
        let err = client.transfers(TeamId::new(1)).await.unwrap_err();

        assert!(matches!(err, FplError::Json(_)));
    }
}
