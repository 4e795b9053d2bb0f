//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The required API base URL is missing. The client refuses to start
    /// without it.
    #[error("api.base_url is required — set GRIDLOG_API__BASE_URL or add it to .gridlog/config.toml")]
    MissingBaseUrl,

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
