use async_trait::async_trait;

use crate::error::HockeyResult;
use crate::formatting::{print_json, print_odds, OutputFormat};

use super::{View, ViewContext};

pub struct OddsView;

#[async_trait]
impl View for OddsView {
    fn name(&self) -> &'static str {
        "Odds"
    }

    async fn render(&self, ctx: &ViewContext) -> HockeyResult<()> {
        let body = ctx.client.get_odds(ctx.league).await?;

        match ctx.format {
            OutputFormat::Json => print_json(&body)?,
            OutputFormat::Simple => print_odds(&body),
        }
        Ok(())
    }
}
