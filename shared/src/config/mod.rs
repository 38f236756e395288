//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cors` - Browser origins allowed to call the API
//! - `environment` - Environment detection
//! - `localization` - Implemented languages and the default language
//! - `security` - Session token verification and detail exposure
//! - `server` - HTTP server binding
//! - `settings` - Layered keyed settings lookup

pub mod cors;
pub mod environment;
pub mod localization;
pub mod security;
pub mod server;
pub mod settings;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cors::CorsConfig;
pub use environment::Environment;
pub use localization::LocalizationConfig;
pub use security::{SecurityConfig, DEFAULT_ORG_ROOT_ID, ORG_ROOT_ID_KEY};
pub use server::ServerConfig;
pub use settings::Settings;

use crate::errors::ConfigError;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment the process runs in; taken from the process environment
    #[serde(skip)]
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Localization configuration
    pub localization: LocalizationConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Build the typed configuration from loaded settings
    pub fn from_settings(settings: &Settings, environment: Environment) -> Result<Self, ConfigError> {
        let mut config: AppConfig = settings.deserialize()?;
        config.environment = environment;
        Ok(config)
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            ..Default::default()
        }
    }
}
