use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, DEFAULT_ORIGIN};
use crate::error::{HockeyError, HockeyResult};
use crate::models::League;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default)]
    pub default_league: Option<League>,
    /// Serve status, leagues, news and game sync from built-in payloads.
    #[serde(default = "default_stub_endpoints")]
    pub stub_endpoints: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_stub_endpoints() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            origin: default_origin(),
            default_league: None,
            stub_endpoints: default_stub_endpoints(),
        }
    }
}

impl Config {
    pub fn league(&self) -> League {
        self.default_league.unwrap_or(League::Nhl)
    }
}

pub fn config_path() -> HockeyResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| HockeyError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> HockeyResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> HockeyResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str).map_err(|e| {
        HockeyError::ConfigError(format!("Invalid config file {}: {}", path.display(), e))
    })
}

pub fn save_config(config: &Config) -> HockeyResult<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> HockeyResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// The API address in effect: environment first, then the config file value.
pub fn effective_api_url(config: &Config) -> String {
    env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| config.api_url.clone())
}

/// Turn an API address into an absolute base URL ending in `/`.
///
/// Relative addresses such as the default `/api` are joined onto `origin`.
pub fn resolve_base_url(api_url: &str, origin: &str) -> HockeyResult<Url> {
    let mut url = match Url::parse(api_url) {
        Ok(url) => url,
        Err(_) => {
            let origin = Url::parse(origin).map_err(|e| {
                HockeyError::ConfigError(format!("Invalid origin '{}': {}", origin, e))
            })?;
            origin.join(api_url).map_err(|e| {
                HockeyError::ConfigError(format!("Invalid API URL '{}': {}", api_url, e))
            })?
        }
    };

    // Url::join drops the last segment unless the base ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
