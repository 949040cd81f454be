use crate::models::League;

use super::tables::{table_for, SCAN_ORDER};

/// Look the abbreviation up in the hinted league's table only.
///
/// Returns `None` when there is no hint, the hint is not a league with a
/// logo table, or that table has no entry for `abbrev`.
pub fn hinted_lookup(abbrev: &str, hint: Option<&str>) -> Option<String> {
    let league = hint?.parse::<League>().ok()?;
    let table = table_for(league)?;
    table.get(abbrev).map(|source| source.url(abbrev))
}

/// Scan every table in fixed priority order (NHL, AHL, LIIGA, DEL); first hit wins.
pub fn scan_lookup(abbrev: &str) -> Option<String> {
    SCAN_ORDER
        .iter()
        .filter_map(|league| table_for(*league))
        .find_map(|table| table.get(abbrev).map(|source| source.url(abbrev)))
}

/// Resolve a team abbreviation to a logo URL.
///
/// The abbreviation is upper-cased first. A league hint only short-circuits
/// the lookup; when it misses, the unconditional scan still runs before
/// falling back. An absent abbreviation returns `fallback` untouched.
pub fn get_team_logo(
    abbrev: Option<&str>,
    fallback: Option<&str>,
    league_hint: Option<&str>,
) -> Option<String> {
    let fallback = fallback.map(str::to_string);

    let abbrev = match abbrev {
        Some(a) if !a.is_empty() => a.to_uppercase(),
        _ => return fallback,
    };

    hinted_lookup(&abbrev, league_hint)
        .or_else(|| scan_lookup(&abbrev))
        .or(fallback)
}
