//! Runtime settings lookup backed by layered configuration sources

use config::{Config, File};
use serde::de::DeserializeOwned;

use super::Environment;
use crate::errors::ConfigError;

/// Prefix for environment variables, e.g. `JB__SECURITY__ORG_ROOT_ID`
pub const ENV_PREFIX: &str = "JB";

/// Keyed settings, merged from `config/default`, the environment specific
/// file and `JB__`-prefixed environment variables (later sources win).
#[derive(Debug, Clone, Default)]
pub struct Settings {
    inner: Config,
}

impl Settings {
    /// Load settings for the given environment from the working directory
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let inner = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(Self { inner })
    }

    /// Wrap an already built configuration
    pub fn from_config(inner: Config) -> Self {
        Self { inner }
    }

    /// Build settings from literal key/value overrides
    pub fn from_overrides<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(key, value)?;
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Read `key`, returning `default` when it is not configured.
    ///
    /// A value that is present but cannot be read as `T` is an error.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.inner.get::<T>(key) {
            Ok(value) => Ok(value),
            Err(config::ConfigError::NotFound(_)) => Ok(default),
            Err(err) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    /// Deserialize the whole settings tree into a typed structure
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        Ok(self.inner.clone().try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_uses_default() {
        let settings = Settings::default();
        assert_eq!(settings.get_or("security.org_root_id", 2_i64).unwrap(), 2);
    }

    #[test]
    fn test_configured_value_wins() {
        let settings = Settings::from_overrides([("security.org_root_id", "7")]).unwrap();
        assert_eq!(settings.get_or("security.org_root_id", 2_i64).unwrap(), 7);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let settings = Settings::from_overrides([("security.org_root_id", "not-a-number")]).unwrap();
        let result = settings.get_or("security.org_root_id", 2_i64);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
