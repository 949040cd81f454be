use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use colored::*;

use hockey_cli::commands::{
    analysis::handle_analysis,
    config::handle_config,
    leagues::handle_leagues,
    lineups::{handle_lineup_matches, handle_match_lineup, handle_team_lineup},
    logo::handle_logo,
    news::handle_news,
    odds::handle_odds,
    open::{handle_open, handle_routes},
    schedule::handle_schedule,
    stats::handle_stats,
    status::handle_status,
    sync::{handle_sync_games, handle_sync_teams},
    teams::handle_teams,
};
use hockey_cli::error::HockeyResult;
use hockey_cli::logging::{init_logging, log_error, log_panic_info};

fn league_arg() -> Arg {
    Arg::new("league")
        .long("league")
        .short('L')
        .value_name("LEAGUE")
        .help("League: NHL, AHL, LIIGA, DEL, KHL")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: simple, json")
        .default_value("simple")
}

fn last_n_arg() -> Arg {
    Arg::new("last-n")
        .long("last-n")
        .short('n')
        .value_name("NUMBER")
        .help("Number of recent games to analyze (default 15)")
        .value_parser(value_parser!(u32))
}

fn logos_arg() -> Arg {
    Arg::new("logos")
        .long("logos")
        .help("Show team logo URLs")
        .action(ArgAction::SetTrue)
}

fn cli() -> Command {
    Command::new("hockey")
        .about("Hockey stats CLI - schedules, match analysis, odds and lineups from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("open")
                .about("Open a view by its route path")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Route path, e.g. / or /winners")
                        .default_value("/")
                        .index(1)
                )
                .arg(league_arg())
                .arg(
                    Arg::new("days")
                        .long("days")
                        .short('d')
                        .value_name("DAYS")
                        .help("Days ahead to include in schedules")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .value_name("OFFSET")
                        .help("Day offset for lineups (0 = today)")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32))
                )
                .arg(logos_arg())
                .arg(format_arg())
        )
        .subcommand(Command::new("routes").about("List the available views"))
        .subcommand(
            Command::new("teams")
                .about("List teams in a league")
                .arg(league_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("schedule")
                .about("Show upcoming games")
                .arg(league_arg())
                .arg(
                    Arg::new("days")
                        .long("days")
                        .short('d')
                        .value_name("DAYS")
                        .help("Days ahead to include (default 7)")
                        .value_parser(value_parser!(u32))
                )
                .arg(logos_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("stats")
                .about("Show statistics for a team")
                .arg(
                    Arg::new("team")
                        .value_name("TEAM")
                        .help("Team abbreviation")
                        .required(true)
                        .index(1)
                )
                .arg(league_arg())
                .arg(last_n_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("analysis")
                .about("Compare two teams ahead of a match")
                .arg(
                    Arg::new("home")
                        .value_name("HOME")
                        .help("Home team abbreviation")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("away")
                        .value_name("AWAY")
                        .help("Away team abbreviation")
                        .required(true)
                        .index(2)
                )
                .arg(league_arg())
                .arg(last_n_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("sync")
                .about("Refresh backend data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("teams")
                        .about("Refresh teams")
                        .arg(league_arg())
                )
                .subcommand(
                    Command::new("games")
                        .about("Refresh games")
                        .arg(league_arg())
                        .arg(
                            Arg::new("season")
                                .long("season")
                                .short('s')
                                .value_name("SEASON")
                                .help("Season identifier, e.g. 20242025")
                        )
                )
        )
        .subcommand(
            Command::new("status")
                .about("Show backend status")
                .arg(league_arg())
                .arg(format_arg())
        )
        .subcommand(
            Command::new("leagues")
                .about("List available leagues")
                .arg(format_arg())
        )
        .subcommand(
            Command::new("news")
                .about("Show news for a team")
                .arg(
                    Arg::new("team")
                        .value_name("TEAM")
                        .help("Team abbreviation")
                        .required(true)
                        .index(1)
                )
                .arg(league_arg())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_name("NUMBER")
                        .help("Maximum number of articles (default 5)")
                        .value_parser(value_parser!(u32))
                )
                .arg(format_arg())
        )
        .subcommand(
            Command::new("odds")
                .about("Show bookmaker odds")
                .arg(league_arg())
                .arg(
                    Arg::new("event-id")
                        .long("event-id")
                        .short('e')
                        .value_name("EVENT_ID")
                        .help("Show odds for a single event")
                        .conflicts_with("league")
                )
                .arg(format_arg())
        )
        .subcommand(
            Command::new("lineups")
                .about("Show match lineups")
                .subcommand_required(true)
                .subcommand(
                    Command::new("matches")
                        .about("List matches with lineups")
                        .arg(league_arg())
                        .arg(
                            Arg::new("day")
                                .long("day")
                                .short('d')
                                .value_name("OFFSET")
                                .help("Day offset (0 = today)")
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(i32))
                        )
                        .arg(format_arg())
                )
                .subcommand(
                    Command::new("match")
                        .about("Lineups for both teams of a match")
                        .arg(
                            Arg::new("url")
                                .value_name("URL")
                                .help("Match page URL")
                                .required(true)
                                .index(1)
                        )
                        .arg(format_arg())
                )
                .subcommand(
                    Command::new("team")
                        .about("Lineup for a single team")
                        .arg(
                            Arg::new("url")
                                .value_name("URL")
                                .help("Team page URL")
                                .required(true)
                                .index(1)
                        )
                        .arg(format_arg())
                )
        )
        .subcommand(
            Command::new("logo")
                .about("Resolve a team logo URL")
                .arg(
                    Arg::new("abbrev")
                        .value_name("ABBREV")
                        .help("Team abbreviation")
                        .index(1)
                )
                .arg(league_arg().help("League hint checked before the full scan"))
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .value_name("URL")
                        .help("URL to print when no table has the team")
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change configuration")
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("API base address (absolute, or relative to the origin)")
                )
                .arg(
                    Arg::new("origin")
                        .long("origin")
                        .value_name("URL")
                        .help("Origin used to resolve a relative API address")
                )
                .arg(league_arg().help("Default league"))
                .arg(
                    Arg::new("stub-endpoints")
                        .long("stub-endpoints")
                        .value_name("BOOL")
                        .help("Serve status, leagues, news and game sync from built-in data")
                        .value_parser(value_parser!(bool))
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current configuration")
                        .action(ArgAction::SetTrue)
                )
        )
}

async fn dispatch(matches: &ArgMatches) -> HockeyResult<()> {
    match matches.subcommand() {
        Some(("open", sub_matches)) => handle_open(sub_matches).await,
        Some(("routes", sub_matches)) => handle_routes(sub_matches),
        Some(("teams", sub_matches)) => handle_teams(sub_matches).await,
        Some(("schedule", sub_matches)) => handle_schedule(sub_matches).await,
        Some(("stats", sub_matches)) => handle_stats(sub_matches).await,
        Some(("analysis", sub_matches)) => handle_analysis(sub_matches).await,
        Some(("sync", sub_matches)) => {
            match sub_matches.subcommand() {
                Some(("teams", teams_matches)) => handle_sync_teams(teams_matches).await,
                Some(("games", games_matches)) => handle_sync_games(games_matches).await,
                _ => {
                    eprintln!("Unknown sync subcommand. Use 'hockey sync --help' for available options.");
                    process::exit(1);
                }
            }
        }
        Some(("status", sub_matches)) => handle_status(sub_matches).await,
        Some(("leagues", sub_matches)) => handle_leagues(sub_matches).await,
        Some(("news", sub_matches)) => handle_news(sub_matches).await,
        Some(("odds", sub_matches)) => handle_odds(sub_matches).await,
        Some(("lineups", sub_matches)) => {
            match sub_matches.subcommand() {
                Some(("matches", m)) => handle_lineup_matches(m).await,
                Some(("match", m)) => handle_match_lineup(m).await,
                Some(("team", m)) => handle_team_lineup(m).await,
                _ => {
                    eprintln!("Unknown lineups subcommand. Use 'hockey lineups --help' for available options.");
                    process::exit(1);
                }
            }
        }
        Some(("logo", sub_matches)) => handle_logo(sub_matches),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'hockey --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Logging is best-effort; the CLI works without a writable cache dir.
    let _ = init_logging();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let matches = cli().get_matches();

    if let Err(e) = dispatch(&matches).await {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
