use crate::client::HockeyClient;
use crate::config::{effective_api_url, load_config, resolve_base_url, save_config, Config};
use crate::error::{HockeyError, HockeyResult};
use crate::models::League;
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and the client instance
pub struct CliContext {
    config: Config,
    api_url: String,
    client: Option<Arc<HockeyClient>>,
}

impl CliContext {
    /// Create a context from an explicit configuration, ignoring the environment
    pub fn new(config: Config) -> Self {
        let api_url = config.api_url.clone();
        Self {
            config,
            api_url,
            client: None,
        }
    }

    /// Load context from saved configuration and the environment
    pub fn load() -> HockeyResult<Self> {
        let config = load_config()?;
        let api_url = effective_api_url(&config);
        Ok(Self {
            config,
            api_url,
            client: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// API address before resolution against the origin
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn default_league(&self) -> League {
        self.config.league()
    }

    /// Get or create the client; the base URL is resolved once, here
    pub fn client(&mut self) -> HockeyResult<Arc<HockeyClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let base_url = resolve_base_url(&self.api_url, &self.config.origin)?;
        let client = Arc::new(HockeyClient::new(base_url, self.config.stub_endpoints)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Apply `update` to the configuration, persist it, and drop the cached client
    pub fn update_config<F>(&mut self, update: F) -> HockeyResult<()>
    where
        F: FnOnce(&mut Config),
    {
        update(&mut self.config);
        save_config(&self.config).map_err(|e| HockeyError::ConfigError(e.to_string()))?;
        self.api_url = effective_api_url(&self.config);
        self.client = None;
        Ok(())
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    api_url: Option<String>,
    origin: Option<String>,
    stub_endpoints: Option<bool>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_url: None,
            origin: None,
            stub_endpoints: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_stub_endpoints(mut self, enabled: bool) -> Self {
        self.stub_endpoints = Some(enabled);
        self
    }

    /// Builds from defaults when any override is set, otherwise loads saved configuration
    pub fn build(self) -> HockeyResult<CliContext> {
        if self.api_url.is_none() && self.origin.is_none() && self.stub_endpoints.is_none() {
            return CliContext::load();
        }

        let mut config = Config::default();
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(origin) = self.origin {
            config.origin = origin;
        }
        if let Some(enabled) = self.stub_endpoints {
            config.stub_endpoints = enabled;
        }

        Ok(CliContext::new(config))
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
