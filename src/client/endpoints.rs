//! One request descriptor per backend capability.
//!
//! Paths and query key names are the backend's contract and must not drift.

use reqwest::Method;

use crate::models::{League, LineupKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
        }
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    fn optional_param(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub fn teams(league: League) -> ApiRequest {
    ApiRequest::get("/teams").param("league", league)
}

pub fn upcoming_games(league: League, days: u32) -> ApiRequest {
    ApiRequest::get("/schedule/upcoming")
        .param("league", league)
        .param("days", days)
}

pub fn team_stats(abbrev: &str, league: League, last_n: u32) -> ApiRequest {
    ApiRequest::get(format!("/teams/{}/stats", abbrev))
        .param("league", league)
        .param("last_n", last_n)
}

pub fn match_analysis(home_team: &str, away_team: &str, league: League, last_n: u32) -> ApiRequest {
    ApiRequest::get("/match/analysis")
        .param("home_team", home_team)
        .param("away_team", away_team)
        .param("league", league)
        .param("last_n", last_n)
}

pub fn sync_teams(league: League) -> ApiRequest {
    ApiRequest::post("/sync/teams").param("league", league)
}

pub fn sync_games(league: League, season: Option<&str>) -> ApiRequest {
    ApiRequest::post("/sync/games")
        .param("league", league)
        .optional_param("season", season)
}

pub fn status(league: League) -> ApiRequest {
    ApiRequest::get("/status").param("league", league)
}

pub fn leagues() -> ApiRequest {
    ApiRequest::get("/leagues")
}

pub fn team_news(abbrev: &str, league: League, limit: u32) -> ApiRequest {
    ApiRequest::get(format!("/teams/{}/news", abbrev))
        .param("league", league)
        .param("limit", limit)
}

pub fn odds(league: Option<League>) -> ApiRequest {
    ApiRequest::get("/odds").optional_param("league", league)
}

pub fn event_odds(event_id: &str) -> ApiRequest {
    ApiRequest::get("/odds").param("event_id", event_id)
}

pub fn lineup_matches(league: League, day: i32) -> ApiRequest {
    ApiRequest::get("/lineups/matches")
        .param("league", league)
        .param("day", day)
}

pub fn lineup(kind: LineupKind, url: &str) -> ApiRequest {
    ApiRequest::get("/lineups/lineup")
        .param("type", kind.as_str())
        .param("url", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_analysis_uses_snake_case_keys() {
        let req = match_analysis("TOR", "MTL", League::Nhl, 10);
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/match/analysis");
        assert_eq!(
            req.query,
            vec![
                ("home_team", "TOR".to_string()),
                ("away_team", "MTL".to_string()),
                ("league", "NHL".to_string()),
                ("last_n", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_optional_params_are_omitted() {
        assert!(odds(None).query.is_empty());
        assert_eq!(odds(Some(League::Khl)).query_value("league"), Some("KHL"));
        assert_eq!(sync_games(League::Ahl, None).query_value("season"), None);
        assert_eq!(sync_games(League::Ahl, Some("20242025")).query_value("season"), Some("20242025"));
    }

    #[test]
    fn test_sync_endpoints_are_posts() {
        assert_eq!(sync_teams(League::Nhl).method, Method::POST);
        assert_eq!(sync_games(League::Nhl, None).method, Method::POST);
    }

    #[test]
    fn test_lineup_type_values() {
        let url = "https://www.flashscore.com/match/abc/";
        let req = lineup(LineupKind::Team, url);
        assert_eq!(req.path, "/lineups/lineup");
        assert_eq!(req.query_value("type"), Some("team"));
        assert_eq!(req.query_value("url"), Some(url));
        assert_eq!(lineup(LineupKind::Match, url).query_value("type"), Some("match"));
    }
}
