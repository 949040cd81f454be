use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HockeyError;
use crate::hockey_error;

/// League codes understood by the backend and by the logo resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Nhl,
    Ahl,
    Liiga,
    Del,
    Khl,
}

impl League {
    pub const ALL: [League; 5] = [League::Nhl, League::Ahl, League::Liiga, League::Del, League::Khl];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Nhl => "NHL",
            League::Ahl => "AHL",
            League::Liiga => "LIIGA",
            League::Del => "DEL",
            League::Khl => "KHL",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = HockeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NHL" => Ok(League::Nhl),
            "AHL" => Ok(League::Ahl),
            "LIIGA" => Ok(League::Liiga),
            "DEL" => Ok(League::Del),
            "KHL" => Ok(League::Khl),
            other => Err(hockey_error!(
                InvalidInput,
                "Unknown league '{}'. Expected one of: NHL, AHL, LIIGA, DEL, KHL",
                other
            )),
        }
    }
}

/// Which lineup page a flashscore URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupKind {
    Match,
    Team,
}

impl LineupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineupKind::Match => "match",
            LineupKind::Team => "team",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("nhl".parse::<League>().unwrap(), League::Nhl);
        assert_eq!(" Liiga ".parse::<League>().unwrap(), League::Liiga);
        assert_eq!("KHL".parse::<League>().unwrap(), League::Khl);
    }

    #[test]
    fn test_parse_unknown_league() {
        match "SHL".parse::<League>() {
            Err(HockeyError::InvalidInput(msg)) => assert!(msg.contains("SHL")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_query_value() {
        for league in League::ALL {
            assert_eq!(league.to_string(), league.as_str());
            assert_eq!(league.as_str().parse::<League>().unwrap(), league);
        }
    }

    #[test]
    fn test_serde_uses_upper_case_codes() {
        let json = serde_json::to_string(&League::Del).unwrap();
        assert_eq!(json, "\"DEL\"");
        let parsed: League = serde_json::from_str("\"AHL\"").unwrap();
        assert_eq!(parsed, League::Ahl);
    }
}
