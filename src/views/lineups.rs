use async_trait::async_trait;

use crate::error::HockeyResult;
use crate::formatting::{print_json, print_lineup_matches, OutputFormat};

use super::{View, ViewContext};

pub struct LineupsView;

#[async_trait]
impl View for LineupsView {
    fn name(&self) -> &'static str {
        "Lineups"
    }

    async fn render(&self, ctx: &ViewContext) -> HockeyResult<()> {
        let body = ctx.client.get_matches(ctx.league, ctx.day).await?;

        match ctx.format {
            OutputFormat::Json => print_json(&body)?,
            OutputFormat::Simple => print_lineup_matches(&body),
        }
        Ok(())
    }
}
