use std::str::FromStr;

use serde_json::Value;

use crate::error::HockeyError;
use crate::hockey_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HockeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            other => Err(hockey_error!(
                InvalidInput,
                "Unknown output format '{}'. Expected simple or json",
                other
            )),
        }
    }
}

/// Walk `path` through nested objects; `None` if any step is missing.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// String (or number) at `path`, empty when absent.
pub fn text(value: &Value, path: &[&str]) -> String {
    match lookup(value, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Array at `key`, or an empty slice.
pub fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
