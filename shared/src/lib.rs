//! Shared configuration and common types for the JobBoard server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and the runtime settings lookup
//! - Configuration error types
//! - Language tags and request locale selection

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, LocalizationConfig, SecurityConfig, ServerConfig, Settings,
};
pub use errors::ConfigError;
pub use types::{LanguagePreferences, LanguageTag, LocaleSelector, FALLBACK_LANGUAGE};
