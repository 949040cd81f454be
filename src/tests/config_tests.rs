use std::env;
use std::sync::Mutex;

use crate::config::{effective_api_url, load_config_from, resolve_base_url, save_config_to, Config};
use crate::constants::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_ORIGIN};
use crate::error::HockeyError;
use crate::models::League;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.origin, DEFAULT_ORIGIN);
    assert!(config.stub_endpoints);
    assert_eq!(config.league(), League::Nhl);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        api_url: "https://hockey.example.com/api".to_string(),
        default_league: Some(League::Ahl),
        stub_endpoints: false,
        ..Config::default()
    };
    save_config_to(&path, &config).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_league": "DEL" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.default_league, Some(League::Del));
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert!(config.stub_endpoints);
}

#[test]
fn test_corrupt_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    match load_config_from(&path) {
        Err(HockeyError::ConfigError(msg)) => assert!(msg.contains("Invalid config file")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_resolve_base_url() {
    assert_eq!(
        resolve_base_url("/api", "http://localhost:5173").unwrap().as_str(),
        "http://localhost:5173/api/"
    );
    assert_eq!(
        resolve_base_url("/api/", "http://localhost:5173").unwrap().as_str(),
        "http://localhost:5173/api/"
    );
    assert_eq!(
        resolve_base_url("https://hockey.example.com/api", "http://ignored").unwrap().as_str(),
        "https://hockey.example.com/api/"
    );
}

lazy_static::lazy_static! {
    static ref ENV_LOCK: Mutex<()> = Mutex::new(());
}

/// Run `f` with the API URL variable set to `value` (or unset), then restore it.
fn with_api_url_env<F: FnOnce()>(value: Option<&str>, f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = env::var(API_URL_ENV).ok();

    match value {
        Some(v) => env::set_var(API_URL_ENV, v),
        None => env::remove_var(API_URL_ENV),
    }
    f();
    match previous {
        Some(v) => env::set_var(API_URL_ENV, v),
        None => env::remove_var(API_URL_ENV),
    }
}

#[test]
fn test_env_api_url_beats_config_file() {
    let config = Config {
        api_url: "https://from-file.example.com/api".to_string(),
        ..Config::default()
    };

    with_api_url_env(Some("https://from-env.example.com/api"), || {
        assert_eq!(effective_api_url(&config), "https://from-env.example.com/api");
    });
}

#[test]
fn test_blank_env_api_url_falls_back_to_config_file() {
    let config = Config {
        api_url: "https://from-file.example.com/api".to_string(),
        ..Config::default()
    };

    with_api_url_env(Some(""), || {
        assert_eq!(effective_api_url(&config), "https://from-file.example.com/api");
    });
    with_api_url_env(Some("   "), || {
        assert_eq!(effective_api_url(&config), "https://from-file.example.com/api");
    });
}

#[test]
fn test_unset_env_api_url_uses_default() {
    with_api_url_env(None, || {
        assert_eq!(effective_api_url(&Config::default()), DEFAULT_API_URL);
    });
}
