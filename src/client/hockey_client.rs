use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use crate::constants::{DEFAULT_DAYS, DEFAULT_LAST_N, DEFAULT_LINEUP_DAY, DEFAULT_NEWS_LIMIT, REQUEST_TIMEOUT};
use crate::error::HockeyResult;
use crate::hockey_error;
use crate::logging::log_debug;
use crate::models::{League, LineupKind};

use super::endpoints::{self, ApiRequest};
use super::stubs;

/// Thin client over the hockey REST backend.
///
/// Every call issues at most one request and hands back the decoded body
/// as-is. Failures are returned to the caller untouched.
pub struct HockeyClient {
    client: reqwest::Client,
    base_url: Url,
    stub_endpoints: bool,
}

impl HockeyClient {
    /// `base_url` must be absolute; see `config::resolve_base_url`.
    pub fn new(base_url: Url, stub_endpoints: bool) -> HockeyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            stub_endpoints,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn stubs_enabled(&self) -> bool {
        self.stub_endpoints
    }

    pub fn url_for(&self, request: &ApiRequest) -> HockeyResult<Url> {
        self.base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| hockey_error!(InvalidInput, "Invalid request path '{}': {}", request.path, e))
    }

    /// Build, but do not send, the HTTP request for `request`.
    pub fn request(&self, request: &ApiRequest) -> HockeyResult<RequestBuilder> {
        let url = self.url_for(request)?;
        Ok(self
            .client
            .request(request.method.clone(), url)
            .query(&request.query))
    }

    async fn execute(&self, request: ApiRequest) -> HockeyResult<Value> {
        log_debug(&format!("{} {} {:?}", request.method, request.path, request.query));

        let response = self
            .request(&request)?
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }

    pub async fn get_teams(&self, league: Option<League>) -> HockeyResult<Value> {
        self.execute(endpoints::teams(league.unwrap_or(League::Nhl))).await
    }

    pub async fn get_upcoming_games(&self, league: Option<League>, days: Option<u32>) -> HockeyResult<Value> {
        let request = endpoints::upcoming_games(
            league.unwrap_or(League::Nhl),
            days.unwrap_or(DEFAULT_DAYS),
        );
        self.execute(request).await
    }

    pub async fn get_team_stats(
        &self,
        team_abbrev: &str,
        league: Option<League>,
        last_n: Option<u32>,
    ) -> HockeyResult<Value> {
        let request = endpoints::team_stats(
            team_abbrev,
            league.unwrap_or(League::Nhl),
            last_n.unwrap_or(DEFAULT_LAST_N),
        );
        self.execute(request).await
    }

    pub async fn get_match_analysis(
        &self,
        home_team: &str,
        away_team: &str,
        league: Option<League>,
        last_n: Option<u32>,
    ) -> HockeyResult<Value> {
        let request = endpoints::match_analysis(
            home_team,
            away_team,
            league.unwrap_or(League::Nhl),
            last_n.unwrap_or(DEFAULT_LAST_N),
        );
        self.execute(request).await
    }

    pub async fn sync_teams(&self, league: Option<League>) -> HockeyResult<Value> {
        self.execute(endpoints::sync_teams(league.unwrap_or(League::Nhl))).await
    }

    pub async fn sync_games(&self, league: Option<League>, season: Option<&str>) -> HockeyResult<Value> {
        if self.stub_endpoints {
            return Ok(stubs::sync_games());
        }
        self.execute(endpoints::sync_games(league.unwrap_or(League::Nhl), season)).await
    }

    pub async fn get_status(&self, league: Option<League>) -> HockeyResult<Value> {
        if self.stub_endpoints {
            return Ok(stubs::status());
        }
        self.execute(endpoints::status(league.unwrap_or(League::Nhl))).await
    }

    pub async fn get_leagues(&self) -> HockeyResult<Value> {
        if self.stub_endpoints {
            return Ok(stubs::leagues());
        }
        self.execute(endpoints::leagues()).await
    }

    pub async fn get_team_news(
        &self,
        team_abbrev: &str,
        league: Option<League>,
        limit: Option<u32>,
    ) -> HockeyResult<Value> {
        if self.stub_endpoints {
            return Ok(stubs::team_news());
        }
        let request = endpoints::team_news(
            team_abbrev,
            league.unwrap_or(League::Del),
            limit.unwrap_or(DEFAULT_NEWS_LIMIT),
        );
        self.execute(request).await
    }

    pub async fn get_odds(&self, league: Option<League>) -> HockeyResult<Value> {
        self.execute(endpoints::odds(league)).await
    }

    pub async fn get_event_odds(&self, event_id: &str) -> HockeyResult<Value> {
        self.execute(endpoints::event_odds(event_id)).await
    }

    pub async fn get_matches(&self, league: Option<League>, day: Option<i32>) -> HockeyResult<Value> {
        let request = endpoints::lineup_matches(
            league.unwrap_or(League::Khl),
            day.unwrap_or(DEFAULT_LINEUP_DAY),
        );
        self.execute(request).await
    }

    pub async fn get_match_lineup(&self, url: &str) -> HockeyResult<Value> {
        self.execute(endpoints::lineup(LineupKind::Match, url)).await
    }

    pub async fn get_team_lineup(&self, url: &str) -> HockeyResult<Value> {
        self.execute(endpoints::lineup(LineupKind::Team, url)).await
    }
}
