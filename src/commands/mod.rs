pub mod analysis;
pub mod config;
pub mod leagues;
pub mod lineups;
pub mod logo;
pub mod news;
pub mod odds;
pub mod open;
pub mod schedule;
pub mod stats;
pub mod status;
pub mod sync;
pub mod teams;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::HockeyResult;
use crate::formatting::OutputFormat;
use crate::models::League;

/// `--league` when given, otherwise `None` so the client applies its own default.
pub(crate) fn league_arg(matches: &ArgMatches) -> HockeyResult<Option<League>> {
    matches
        .try_get_one::<String>("league")
        .ok()
        .flatten()
        .map(|l| l.parse::<League>())
        .transpose()
}

/// `--league`, falling back to the configured default league.
pub(crate) fn league_or_default(matches: &ArgMatches, context: &CliContext) -> HockeyResult<League> {
    Ok(league_arg(matches)?.unwrap_or_else(|| context.default_league()))
}

pub(crate) fn format_arg(matches: &ArgMatches) -> HockeyResult<OutputFormat> {
    matches
        .try_get_one::<String>("format")
        .ok()
        .flatten()
        .map(|f| f.parse::<OutputFormat>())
        .transpose()
        .map(|f| f.unwrap_or(OutputFormat::Simple))
}

pub(crate) fn number_arg<T>(matches: &ArgMatches, id: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}
