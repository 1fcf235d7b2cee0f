//! Application-wide error types.

use thiserror::Error;

/// Configuration problems detected by validation.
///
/// Resolution itself never fails; these only come out of the `validate*`
/// functions in [`crate::config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required keys that are unset or empty, in required-set order.
    #[error(
        "Missing required environment variables: {}. Please check your .env file.",
        .0.join(", ")
    )]
    MissingRequired(Vec<&'static str>),

    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("env file error: {0}")]
    EnvFile(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
