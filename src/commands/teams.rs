use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::{print_json, print_teams, OutputFormat};
use super::{format_arg, league_or_default};

pub async fn handle_teams(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let client = context.client()?;

    let teams = client.get_teams(Some(league)).await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&teams)?,
        OutputFormat::Simple => print_teams(&teams, league),
    }

    Ok(())
}
