pub mod resolver;
pub mod tables;

pub use resolver::{get_team_logo, hinted_lookup, scan_lookup};
pub use tables::{table_for, LogoSource, LogoTable, SCAN_ORDER};
