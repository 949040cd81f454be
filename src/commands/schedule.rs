use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::{print_games, print_json, OutputFormat};
use super::{format_arg, league_or_default, number_arg};

pub async fn handle_schedule(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let days = number_arg::<u32>(matches, "days");
    let client = context.client()?;

    let games = client.get_upcoming_games(Some(league), days).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&games)?,
        OutputFormat::Simple => print_games(&games, league, matches.get_flag("logos")),
    }

    Ok(())
}
