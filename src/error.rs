use thiserror::Error;

#[derive(Error, Debug)]
pub enum HockeyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No route matches path '{0}'")]
    RouteNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type HockeyResult<T> = Result<T, HockeyError>;

/// Turn a missing value into a `HockeyError` carrying `msg`.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> HockeyResult<T>;
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> HockeyResult<T> {
        self.ok_or_else(|| HockeyError::Unknown(msg.to_string()))
    }
}

#[macro_export]
macro_rules! hockey_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::HockeyError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::HockeyError::$error_type(format!($fmt, $($arg)*))
    };
}
