use async_trait::async_trait;
use colored::*;
use serde_json::{json, Value};

use crate::error::HockeyResult;
use crate::formatting::{print_json, print_match_analysis, rows, text, OutputFormat};
use crate::logging::log_error;

use super::{View, ViewContext};

/// Upcoming games, each followed by the head-to-head analysis of the two teams.
pub struct WinnersView;

#[async_trait]
impl View for WinnersView {
    fn name(&self) -> &'static str {
        "Winners"
    }

    async fn render(&self, ctx: &ViewContext) -> HockeyResult<()> {
        let league = ctx.league_or_default();
        let schedule = ctx.client.get_upcoming_games(Some(league), ctx.days).await?;
        let games = rows(&schedule, "games");

        if games.is_empty() && ctx.format == OutputFormat::Simple {
            println!("{}", "No upcoming games.".dimmed());
            return Ok(());
        }

        let mut report = Vec::with_capacity(games.len());

        for game in games {
            let home = text(game, &["home_team", "abbrev"]);
            let away = text(game, &["away_team", "abbrev"]);
            if home.is_empty() || away.is_empty() {
                continue;
            }

            // One failed pairing should not hide the rest of the slate.
            let analysis = match ctx.client.get_match_analysis(&home, &away, Some(league), None).await {
                Ok(body) => body,
                Err(e) => {
                    log_error(&format!("Analysis for {} vs {} failed: {}", home, away, e));
                    if ctx.format == OutputFormat::Simple {
                        println!("{} {}", format!("{} vs {}:", home, away).bold(), e.to_string().red());
                    }
                    continue;
                }
            };

            match ctx.format {
                OutputFormat::Json => report.push(json!({ "game": game, "analysis": analysis })),
                OutputFormat::Simple => {
                    println!(
                        "\n{} {} {} {}",
                        text(game, &["date"]).dimmed(),
                        away.cyan().bold(),
                        "@".dimmed(),
                        home.cyan().bold()
                    );
                    println!("{}", "═".repeat(60).dimmed());
                    print_match_analysis(&analysis);
                }
            }
        }

        if ctx.format == OutputFormat::Json {
            print_json(&Value::Array(report))?;
        }
        Ok(())
    }
}
