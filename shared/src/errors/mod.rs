//! Shared error types

use thiserror::Error;

/// Errors raised while loading or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or merged
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A setting exists but holds a value of the wrong shape
    #[error("invalid value for setting `{key}`: {message}")]
    InvalidValue { key: String, message: String },
}
