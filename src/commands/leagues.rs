use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::{print_json, print_leagues, OutputFormat};
use super::format_arg;

pub async fn handle_leagues(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let client = context.client()?;

    let leagues = client.get_leagues().await?;

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&leagues)?,
        OutputFormat::Simple => print_leagues(&leagues),
    }

    Ok(())
}
