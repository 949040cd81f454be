use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{HockeyResult, ErrorContext};
use crate::formatting::{print_json, print_match_analysis, OutputFormat};
use super::{format_arg, league_or_default, number_arg};

pub async fn handle_analysis(matches: &ArgMatches) -> HockeyResult<()> {
    let home = matches.get_one::<String>("home").context("Home team is required")?;
    let away = matches.get_one::<String>("away").context("Away team is required")?;

    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let last_n = number_arg::<u32>(matches, "last-n");
    let client = context.client()?;

    let analysis = client
        .get_match_analysis(&home.to_uppercase(), &away.to_uppercase(), Some(league), last_n)
        .await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Simple => print_match_analysis(&analysis),
    }

    Ok(())
}
