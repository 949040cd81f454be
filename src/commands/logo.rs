use clap::ArgMatches;
use colored::*;
use crate::error::HockeyResult;
use crate::logos::{get_team_logo, hinted_lookup};

pub fn handle_logo(matches: &ArgMatches) -> HockeyResult<()> {
    let abbrev = matches.get_one::<String>("abbrev").map(String::as_str);
    let hint = matches.get_one::<String>("league").map(String::as_str);
    let fallback = matches.get_one::<String>("fallback").map(String::as_str);

    match get_team_logo(abbrev, fallback, hint) {
        Some(url) => {
            println!("{}", url);
            let upper = abbrev.map(str::to_uppercase).unwrap_or_default();
            if hint.is_some() && hinted_lookup(&upper, hint).is_none() {
                println!("{}", format!("(not in the {} table, resolved by scan)", hint.unwrap_or_default()).dimmed());
            }
        }
        None => println!("{}", "No logo".dimmed()),
    }

    Ok(())
}
