use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{HockeyResult, ErrorContext};
use crate::formatting::{print_json, print_team_stats, OutputFormat};
use super::{format_arg, league_or_default, number_arg};

pub async fn handle_stats(matches: &ArgMatches) -> HockeyResult<()> {
    let team = matches.get_one::<String>("team").context("Team abbreviation is required")?;

    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let last_n = number_arg::<u32>(matches, "last-n");
    let client = context.client()?;

    let stats = client.get_team_stats(&team.to_uppercase(), Some(league), last_n).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Simple => print_team_stats(&stats),
    }

    Ok(())
}
