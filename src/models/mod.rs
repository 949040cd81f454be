pub mod league;

pub use league::{League, LineupKind};
