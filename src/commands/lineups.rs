use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{HockeyResult, ErrorContext};
use crate::formatting::{print_json, print_lineup_matches, print_match_lineup, print_team_lineup, OutputFormat};
use super::{format_arg, league_arg, number_arg};

pub async fn handle_lineup_matches(matches: &ArgMatches) -> HockeyResult<()> {
    let league = league_arg(matches)?;
    let day = number_arg::<i32>(matches, "day");

    let mut context = CliContext::load()?;
    let client = context.client()?;

    let body = client.get_matches(league, day).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&body)?,
        OutputFormat::Simple => print_lineup_matches(&body),
    }

    Ok(())
}

pub async fn handle_match_lineup(matches: &ArgMatches) -> HockeyResult<()> {
    let url = matches.get_one::<String>("url").context("Match URL is required")?;

    let mut context = CliContext::load()?;
    let client = context.client()?;

    let body = client.get_match_lineup(url).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&body)?,
        OutputFormat::Simple => print_match_lineup(&body),
    }

    Ok(())
}

pub async fn handle_team_lineup(matches: &ArgMatches) -> HockeyResult<()> {
    let url = matches.get_one::<String>("url").context("Team URL is required")?;

    let mut context = CliContext::load()?;
    let client = context.client()?;

    let body = client.get_team_lineup(url).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&body)?,
        OutputFormat::Simple => print_team_lineup(&body),
    }

    Ok(())
}
