//! Terminal views the router loads on demand.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::HockeyClient;
use crate::error::HockeyResult;
use crate::formatting::OutputFormat;
use crate::models::League;

pub mod home;
pub mod lineups;
pub mod odds;
pub mod winners;

pub use home::HomeView;
pub use lineups::LineupsView;
pub use odds::OddsView;
pub use winners::WinnersView;

/// Everything a view needs to fetch and draw itself.
pub struct ViewContext {
    pub client: Arc<HockeyClient>,
    /// `--league` as given; `None` lets each view pick its default.
    pub league: Option<League>,
    /// Configured default for views that always need a concrete league.
    pub default_league: League,
    pub days: Option<u32>,
    pub day: Option<i32>,
    pub format: OutputFormat,
    pub show_logos: bool,
}

impl ViewContext {
    pub fn league_or_default(&self) -> League {
        self.league.unwrap_or(self.default_league)
    }
}

#[async_trait]
pub trait View: Send + Sync {
    fn name(&self) -> &'static str;

    async fn render(&self, ctx: &ViewContext) -> HockeyResult<()>;
}
