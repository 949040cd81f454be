use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::error::{HockeyResult, ErrorContext};
use crate::logging::log_info;
use crate::router::{resolve_or_err, ROUTES};
use crate::views::ViewContext;
use super::{format_arg, league_arg, number_arg};

pub async fn handle_open(matches: &ArgMatches) -> HockeyResult<()> {
    let path = matches.get_one::<String>("path").context("Path is required")?;
    let route = resolve_or_err(path)?;

    let mut context = CliContext::load()?;
    let view_context = ViewContext {
        client: context.client()?,
        league: league_arg(matches)?,
        default_league: context.default_league(),
        days: number_arg::<u32>(matches, "days"),
        day: number_arg::<i32>(matches, "day"),
        format: format_arg(matches)?,
        show_logos: matches.get_flag("logos"),
    };

    log_info(&format!("Opening {} ({})", route.path, route.name));
    let view = route.load();
    view.render(&view_context).await
}

pub fn handle_routes(_matches: &ArgMatches) -> HockeyResult<()> {
    for route in ROUTES {
        println!("  {:<12} {}", route.path.cyan(), route.name);
    }
    Ok(())
}
