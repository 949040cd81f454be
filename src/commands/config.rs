use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::config::{config_path, resolve_base_url};
use crate::error::HockeyResult;
use crate::models::League;

pub fn handle_config(matches: &ArgMatches) -> HockeyResult<()> {
    let mut context = CliContext::load()?;

    let api_url = matches.get_one::<String>("api-url").cloned();
    let origin = matches.get_one::<String>("origin").cloned();
    let league = matches
        .get_one::<String>("league")
        .map(|l| l.parse::<League>())
        .transpose()?;
    let stubs = matches.get_one::<bool>("stub-endpoints").copied();

    if api_url.is_some() || origin.is_some() || league.is_some() || stubs.is_some() {
        if let Some(url) = &api_url {
            // Must resolve before it is persisted.
            resolve_base_url(url, origin.as_deref().unwrap_or(&context.config().origin))?;
        }

        context.update_config(|config| {
            if let Some(url) = api_url {
                config.api_url = url;
            }
            if let Some(origin) = origin {
                config.origin = origin;
            }
            if let Some(league) = league {
                config.default_league = Some(league);
            }
            if let Some(enabled) = stubs {
                config.stub_endpoints = enabled;
            }
        })?;
        println!("Configuration saved to {}", config_path()?.display());
    }

    if matches.get_flag("show") || nothing_to_update(matches) {
        let config = context.config();
        println!("API URL:        {}", context.api_url());
        println!("Origin:         {}", config.origin);
        println!("Base URL:       {}", resolve_base_url(context.api_url(), &config.origin)?);
        println!("Default league: {}", config.league());
        println!("Stub endpoints: {}", config.stub_endpoints);
    }

    Ok(())
}

fn nothing_to_update(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("api-url").is_none()
        && matches.get_one::<String>("origin").is_none()
        && matches.get_one::<String>("league").is_none()
        && matches.get_one::<bool>("stub-endpoints").is_none()
}
