use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::print_sync_result;
use crate::logging::log_info;
use super::league_or_default;

pub async fn handle_sync_teams(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let client = context.client()?;

    log_info(&format!("Syncing {} teams", league));
    let result = client.sync_teams(Some(league)).await?;
    print_sync_result(&result);

    Ok(())
}

pub async fn handle_sync_games(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;
    let league = league_or_default(matches, &context)?;
    let season = matches.get_one::<String>("season").map(String::as_str);
    let client = context.client()?;

    log_info(&format!("Syncing {} games (season {:?})", league, season));
    let result = client.sync_games(Some(league), season).await?;
    print_sync_result(&result);

    Ok(())
}
