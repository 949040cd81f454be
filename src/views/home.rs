use async_trait::async_trait;

use crate::error::HockeyResult;
use crate::formatting::{print_games, print_json, OutputFormat};

use super::{View, ViewContext};

/// Upcoming games for the selected league.
pub struct HomeView;

#[async_trait]
impl View for HomeView {
    fn name(&self) -> &'static str {
        "Home"
    }

    async fn render(&self, ctx: &ViewContext) -> HockeyResult<()> {
        let league = ctx.league_or_default();
        let body = ctx.client.get_upcoming_games(Some(league), ctx.days).await?;

        match ctx.format {
            OutputFormat::Json => print_json(&body)?,
            OutputFormat::Simple => print_games(&body, league, ctx.show_logos),
        }
        Ok(())
    }
}
