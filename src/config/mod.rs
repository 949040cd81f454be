pub mod config;

pub use config::{
    config_path, effective_api_url, load_config, load_config_from, resolve_base_url, save_config,
    save_config_to, Config,
};
