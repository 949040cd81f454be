use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::{print_json, print_odds, OutputFormat};
use super::{format_arg, league_arg};

pub async fn handle_odds(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let client = context.client()?;

    let odds = match matches.get_one::<String>("event-id") {
        Some(event_id) => client.get_event_odds(event_id).await?,
        None => client.get_odds(league_arg(matches)?).await?,
    };

    match format_arg(matches)? {
        OutputFormat::Json => print_json(&odds)?,
        OutputFormat::Simple => print_odds(&odds),
    }

    Ok(())
}
