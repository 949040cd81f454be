use std::sync::Arc;

use hockey_cli::formatting::OutputFormat;
use hockey_cli::router::resolve;
use hockey_cli::views::{View, ViewContext};
use hockey_cli::{HockeyClient, League};

mod common;
use common::{request_line, serve_once, serve_sequence};

fn context(client: HockeyClient, league: Option<League>, format: OutputFormat) -> ViewContext {
    ViewContext {
        client: Arc::new(client),
        league,
        default_league: League::Nhl,
        days: None,
        day: None,
        format,
        show_logos: true,
    }
}

#[tokio::test]
async fn test_home_view_fetches_upcoming_games() {
    let body = r#"{"games":[{"date":"12.10.2025 19:00","home_team":{"abbrev":"TOR"},"away_team":{"abbrev":"MTL"},"venue":"Scotiabank Arena"}],"league":"NHL"}"#;
    let (base, server) = serve_once("200 OK", body).await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), None, OutputFormat::Simple);

    let view = resolve("/").unwrap().load();
    view.render(&ctx).await.unwrap();

    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/schedule/upcoming?league=NHL&days=7 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_winners_view_with_empty_slate() {
    let (base, server) = serve_once("200 OK", r#"{"games":[]}"#).await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), Some(League::Ahl), OutputFormat::Json);

    let view = resolve("/winners").unwrap().load();
    view.render(&ctx).await.unwrap();

    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/schedule/upcoming?league=AHL&days=7 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_odds_view_passes_league() {
    let (base, server) = serve_once("200 OK", r#"{"events":[],"count":0}"#).await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), Some(League::Khl), OutputFormat::Simple);

    resolve("/odds").unwrap().load().render(&ctx).await.unwrap();

    assert_eq!(request_line(&server.await.unwrap()), "GET /api/odds?league=KHL HTTP/1.1");
}

#[tokio::test]
async fn test_view_surfaces_backend_failure() {
    let (base, server) = serve_once("503 Service Unavailable", "{}").await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), Some(League::Khl), OutputFormat::Simple);

    let result = resolve("/lineups").unwrap().load().render(&ctx).await;

    assert!(result.is_err());
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/lineups/matches?league=KHL&day=0 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_lineups_view_without_league_uses_client_default() {
    let (base, server) = serve_once("200 OK", r#"{"success":true,"leagues":{}}"#).await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), None, OutputFormat::Simple);

    resolve("/lineups").unwrap().load().render(&ctx).await.unwrap();

    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/lineups/matches?league=KHL&day=0 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_odds_view_without_league_requests_all_leagues() {
    let (base, server) = serve_once("200 OK", r#"{"events":[],"count":0}"#).await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), None, OutputFormat::Simple);

    resolve("/odds").unwrap().load().render(&ctx).await.unwrap();

    assert_eq!(request_line(&server.await.unwrap()), "GET /api/odds HTTP/1.1");
}

#[tokio::test]
async fn test_winners_view_keeps_going_after_failed_analysis() {
    let schedule = r#"{"games":[{"home_team":{"abbrev":"TOR"},"away_team":{"abbrev":"MTL"}},{"home_team":{"abbrev":"BOS"},"away_team":{"abbrev":"NYR"}}]}"#;
    let (base, server) = serve_sequence(vec![
        ("200 OK", schedule),
        ("500 Internal Server Error", r#"{"error":"boom"}"#),
        ("200 OK", r#"{"home_team":{"abbrev":"BOS"},"away_team":{"abbrev":"NYR"}}"#),
    ])
    .await;
    let ctx = context(HockeyClient::new(base, true).unwrap(), None, OutputFormat::Json);

    resolve("/winners").unwrap().load().render(&ctx).await.unwrap();

    assert_eq!(
        server.await.unwrap(),
        vec![
            "GET /api/schedule/upcoming?league=NHL&days=7 HTTP/1.1".to_string(),
            "GET /api/match/analysis?home_team=TOR&away_team=MTL&league=NHL&last_n=15 HTTP/1.1".to_string(),
            "GET /api/match/analysis?home_team=BOS&away_team=NYR&league=NHL&last_n=15 HTTP/1.1".to_string(),
        ]
    );
}
