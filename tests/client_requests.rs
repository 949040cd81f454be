use hockey_cli::{HockeyClient, HockeyError, League};
use serde_json::json;

mod common;
use common::{request_line, serve_once};

#[tokio::test]
async fn test_get_teams_defaults_to_nhl() {
    let (base, server) = serve_once("200 OK", r#"{"teams":[{"abbrev":"BOS"}]}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    let body = client.get_teams(None).await.unwrap();

    assert_eq!(body, json!({ "teams": [{ "abbrev": "BOS" }] }));
    assert_eq!(request_line(&server.await.unwrap()), "GET /api/teams?league=NHL HTTP/1.1");
}

#[tokio::test]
async fn test_match_analysis_query() {
    let (base, server) = serve_once("200 OK", r#"{"home_team":{},"away_team":{}}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    client
        .get_match_analysis("TOR", "MTL", Some(League::Ahl), Some(20))
        .await
        .unwrap();

    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/match/analysis?home_team=TOR&away_team=MTL&league=AHL&last_n=20 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_lineup_matches_defaults() {
    let (base, server) = serve_once("200 OK", r#"{"success":true,"leagues":{}}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    client.get_matches(None, None).await.unwrap();

    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/lineups/matches?league=KHL&day=0 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_event_odds_query() {
    let (base, server) = serve_once("200 OK", r#"{"event_id":"42"}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    let body = client.get_event_odds("42").await.unwrap();

    assert_eq!(body["event_id"], "42");
    assert_eq!(request_line(&server.await.unwrap()), "GET /api/odds?event_id=42 HTTP/1.1");
}

#[tokio::test]
async fn test_sync_teams_posts() {
    let (base, server) = serve_once("200 OK", r#"{"success":true,"message":"ok"}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    client.sync_teams(Some(League::Liiga)).await.unwrap();

    assert_eq!(request_line(&server.await.unwrap()), "POST /api/sync/teams?league=LIIGA HTTP/1.1");
}

#[tokio::test]
async fn test_live_news_when_stubs_disabled() {
    let (base, server) = serve_once("200 OK", r#"{"articles":[{"title":"Win"}]}"#).await;
    let client = HockeyClient::new(base, false).unwrap();

    let body = client.get_team_news("MAN", None, None).await.unwrap();

    assert_eq!(body["articles"][0]["title"], "Win");
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/teams/MAN/news?league=DEL&limit=5 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    let result = client.get_upcoming_games(Some(League::Del), Some(3)).await;

    match result {
        Err(HockeyError::RequestError(e)) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("Expected RequestError, got {:?}", other),
    }
    assert_eq!(
        request_line(&server.await.unwrap()),
        "GET /api/schedule/upcoming?league=DEL&days=3 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_body_is_returned_verbatim() {
    let (base, server) = serve_once("200 OK", r#"[1,"two",{"three":3.5},null]"#).await;
    let client = HockeyClient::new(base, true).unwrap();

    let body = client.get_odds(None).await.unwrap();

    assert_eq!(body, json!([1, "two", { "three": 3.5 }, null]));
    assert_eq!(request_line(&server.await.unwrap()), "GET /api/odds HTTP/1.1");
}
