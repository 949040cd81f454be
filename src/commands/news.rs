use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{HockeyResult, ErrorContext};
use crate::formatting::{print_json, print_news, OutputFormat};
use super::{format_arg, league_arg, number_arg};

pub async fn handle_news(matches: &ArgMatches) -> HockeyResult<()> {
    let team = matches.get_one::<String>("team").context("Team abbreviation is required")?;
    let league = league_arg(matches)?;
    let limit = number_arg::<u32>(matches, "limit");

    let mut context = CliContext::load()?;
    let client = context.client()?;

    let news = client.get_team_news(&team.to_uppercase(), league, limit).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&news)?,
        OutputFormat::Simple => print_news(&news),
    }

    Ok(())
}
