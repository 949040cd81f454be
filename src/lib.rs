// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod logos;
pub mod models;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{ApiRequest, HockeyClient};
pub use config::{load_config, save_config, Config};
pub use error::{HockeyError, HockeyResult};
pub use logos::get_team_logo;
pub use models::*;
