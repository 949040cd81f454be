use colored::*;
use serde_json::Value;

use crate::error::HockeyResult;
use crate::logos::get_team_logo;
use crate::models::League;
use super::utils::*;

pub fn print_json(body: &Value) -> HockeyResult<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

/// Rows of a list response; the backend wraps some lists in an object and returns others bare.
pub fn rows<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    match body {
        Value::Array(list) => list.as_slice(),
        _ => items(body, key),
    }
}

/// Logo for a team object, preferring the built-in tables over the backend's `logo_url`.
pub fn team_logo(team: &Value, league: League) -> Option<String> {
    let abbrev = text(team, &["abbrev"]);
    let remote = text(team, &["logo_url"]);
    get_team_logo(
        Some(abbrev.as_str()).filter(|a| !a.is_empty()),
        Some(remote.as_str()).filter(|r| !r.is_empty()),
        Some(league.as_str()),
    )
}

pub fn print_teams(body: &Value, league: League) {
    let teams = rows(body, "teams");
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    println!("Found {} {} teams:", teams.len(), league);
    for team in teams {
        let logo = team_logo(team, league).unwrap_or_default();
        println!(
            "  {:<10} {:<32} {}",
            text(team, &["abbrev"]).cyan().bold(),
            truncate(&text(team, &["name"]), 32),
            logo.dimmed()
        );
    }
}

pub fn print_games(body: &Value, league: League, show_logos: bool) {
    let games = rows(body, "games");
    if games.is_empty() {
        println!("{}", "No upcoming games.".dimmed());
        return;
    }

    println!("\n{} ({})", format!("Upcoming {} games", league).bold(), games.len());
    println!("{}", "─".repeat(60).dimmed());

    for game in games {
        let home = game.get("home_team").unwrap_or(&Value::Null);
        let away = game.get("away_team").unwrap_or(&Value::Null);
        println!(
            "{:<18} {:>6} @ {:<6} {}",
            text(game, &["date"]).dimmed(),
            text(away, &["abbrev"]).cyan(),
            text(home, &["abbrev"]).cyan(),
            truncate(&text(game, &["venue"]), 30)
        );

        if show_logos {
            for side in [away, home] {
                if let Some(logo) = team_logo(side, league) {
                    println!("    {} {}", text(side, &["abbrev"]), logo.dimmed());
                }
            }
        }
    }
}

fn print_threshold_block(title: &str, block: Option<&Value>) {
    let Some(Value::Object(thresholds)) = block else {
        return;
    };

    let line = thresholds
        .iter()
        .map(|(threshold, entry)| {
            format!("{} {}%", threshold, text(entry, &["percentage"]))
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("    {:<18} {}", title.dimmed(), line);
}

pub fn print_team_stats(body: &Value) {
    let name = text(body, &["team", "name"]);
    let abbrev = text(body, &["team", "abbrev"]);
    println!("{} {}", abbrev.cyan().bold(), name.bold());

    for location in ["home", "away"] {
        let Some(side) = lookup(body, &["stats", location]) else {
            continue;
        };
        println!(
            "  {} ({} matches)",
            location.to_uppercase(),
            text(side, &["total_matches"])
        );
        print_threshold_block("Individual totals", side.get("individual_totals"));
        print_threshold_block("Match totals", side.get("match_totals"));
    }
}

pub fn print_match_analysis(body: &Value) {
    for (label, key) in [("Home", "home_team"), ("Away", "away_team")] {
        match body.get(key) {
            Some(side) => {
                println!("\n{}", label.bold().underline());
                print_team_stats(side);
            }
            None => println!("{}", format!("{} team missing from analysis", label).yellow()),
        }
    }
}

pub fn print_odds(body: &Value) {
    // A single event comes back bare; lists under "events"
    let events: Vec<&Value> = if body.get("event_id").is_some() {
        vec![body]
    } else {
        rows(body, "events").iter().collect()
    };

    if events.is_empty() {
        println!("{}", "No odds available.".dimmed());
        return;
    }

    for event in events {
        let home = text(event, &["home_team", "name"]);
        let away = text(event, &["away_team", "name"]);
        println!(
            "{} {} vs {} {}",
            text(event, &["league"]).cyan(),
            home.bold(),
            away.bold(),
            format!("[{}]", text(event, &["event_id"])).dimmed()
        );

        let totals = items(lookup(event, &["odds"]).unwrap_or(&Value::Null), "match_total");
        for total in totals {
            println!(
                "    total {:<5} over {:<6} under {}",
                text(total, &["line"]),
                text(total, &["over"]).green(),
                text(total, &["under"]).red()
            );
        }
    }
}

fn format_timestamp(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.with_timezone(&chrono::Local).format("%d.%m %H:%M").to_string())
        .unwrap_or_default()
}

pub fn print_lineup_matches(body: &Value) {
    let Some(Value::Object(leagues)) = body.get("leagues") else {
        println!("{}", "No matches found.".dimmed());
        return;
    };

    if leagues.is_empty() {
        println!("{}", "No matches found.".dimmed());
        return;
    }

    for (league_name, matches) in leagues {
        println!("\n{}", league_name.bold());
        println!("{}", "─".repeat(50).dimmed());
        for m in matches.as_array().map(Vec::as_slice).unwrap_or(&[]) {
            println!(
                "  {:<12} {} - {}",
                format_timestamp(m.get("timestamp").and_then(Value::as_i64)).dimmed(),
                text(m, &["home"]),
                text(m, &["away"])
            );
            println!("    {}", text(m, &["url"]).dimmed());
        }
    }
}

fn print_player_group(title: &str, players: &[Value], paint: fn(ColoredString) -> ColoredString) {
    if players.is_empty() {
        return;
    }

    println!("  {}", title.bold());
    for player in players {
        let line = format!(
            "{:<28} pts {:<4} eff {}",
            truncate(&text(player, &["name"]), 28),
            text(player, &["points"]),
            text(player, &["efficiency"])
        );
        println!("    {}", paint(line.normal()));
    }
}

pub fn print_team_lineup(body: &Value) {
    println!(
        "\n{} ({} players)",
        text(body, &["team"]).bold(),
        text(body, &["total_players"])
    );

    let players = body.get("players").unwrap_or(&Value::Null);
    print_player_group("Leaders", items(players, "leaders_active"), |s| s.yellow());
    print_player_group("Questionable", items(players, "leaders_questionable"), |s| {
        s.truecolor(255, 165, 0)
    });
    print_player_group("Absent", items(players, "absent"), |s| s.red());
    print_player_group("Others", items(players, "others"), |s| s);
}

pub fn print_match_lineup(body: &Value) {
    for key in ["home", "away"] {
        match body.get(key) {
            Some(side) if !side.is_null() => print_team_lineup(side),
            _ => println!("{}", format!("No {} lineup available.", key).dimmed()),
        }
    }
}

pub fn print_leagues(body: &Value) {
    for league in rows(body, "leagues") {
        println!(
            "  {:<8} {}",
            text(league, &["code"]).cyan().bold(),
            text(league, &["name"])
        );
    }
}

pub fn print_status(body: &Value) {
    let status = text(body, &["status"]);
    let painted = if status == "ok" { status.green() } else { status.red() };
    println!("Status:  {}", painted);
    let version = text(body, &["version"]);
    if !version.is_empty() {
        println!("Version: {}", version);
    }
}

pub fn print_news(body: &Value) {
    let articles = rows(body, "articles");
    if articles.is_empty() {
        println!("{}", "No news found.".dimmed());
        return;
    }

    for article in articles {
        println!("• {}", text(article, &["title"]).bold());
        let url = text(article, &["url"]);
        if !url.is_empty() {
            println!("  {}", url.dimmed());
        }
    }
}

pub fn print_sync_result(body: &Value) {
    let message = text(body, &["message"]);
    let ok = body.get("success").and_then(Value::as_bool).unwrap_or(true);
    if ok {
        println!("✅ {}", if message.is_empty() { "Sync complete".to_string() } else { message });
    } else {
        println!("❌ {}", if message.is_empty() { "Sync failed".to_string() } else { message });
    }
}
