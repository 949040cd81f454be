pub mod hockey;
pub mod utils;

pub use hockey::{
    print_games, print_json, print_leagues, print_match_analysis, print_match_lineup, print_news,
    print_odds, print_lineup_matches, print_status, print_sync_result, print_team_lineup,
    print_team_stats, print_teams, rows, team_logo,
};
pub use utils::{items, lookup, text, truncate, OutputFormat};
