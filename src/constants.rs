use std::time::Duration;

pub const CONFIG_FILE: &str = ".hockey-cli-config.json";

/// Deployment-time override for the API base address.
pub const API_URL_ENV: &str = "HOCKEY_API_URL";

pub const DEFAULT_API_URL: &str = "/api";

// Relative API addresses are resolved against this origin (the dev server proxy).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Backend defaults mirrored by the client
pub const DEFAULT_DAYS: u32 = 7;
pub const DEFAULT_LAST_N: u32 = 15;
pub const DEFAULT_NEWS_LIMIT: u32 = 5;
pub const DEFAULT_LINEUP_DAY: i32 = 0;

pub const NHL_LOGO_DIR: &str = "/logos";
pub const AHL_LOGO_TEMPLATE: &str = "https://assets.leaguestat.com/ahl/logos/{id}.png";
