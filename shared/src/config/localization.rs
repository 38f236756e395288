//! Localization configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::language::FALLBACK_LANGUAGE;

/// Languages the application ships translations for, and how to pick one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizationConfig {
    /// Language used when no client preference matches.
    /// Blank or missing values fall back to `en`.
    #[serde(default)]
    pub default_language: Option<String>,

    /// Implemented language codes, matched against client preferences
    #[serde(default = "default_implemented_languages")]
    pub implemented_languages: Vec<String>,

    /// Optional resource file replacing the bundled catalog
    #[serde(default)]
    pub resources_path: Option<PathBuf>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_language: Some(String::from(FALLBACK_LANGUAGE)),
            implemented_languages: default_implemented_languages(),
            resources_path: None,
        }
    }
}

impl LocalizationConfig {
    /// Effective default language
    pub fn default_language(&self) -> &str {
        self.default_language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .unwrap_or(FALLBACK_LANGUAGE)
    }
}

fn default_implemented_languages() -> Vec<String> {
    vec![String::from("en"), String::from("es")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_default_language_falls_back_to_english() {
        let config = LocalizationConfig {
            default_language: Some(String::from("  ")),
            ..Default::default()
        };
        assert_eq!(config.default_language(), "en");

        let config = LocalizationConfig {
            default_language: None,
            ..Default::default()
        };
        assert_eq!(config.default_language(), "en");
    }

    #[test]
    fn test_configured_default_language() {
        let config = LocalizationConfig {
            default_language: Some(String::from("es")),
            ..Default::default()
        };
        assert_eq!(config.default_language(), "es");
        assert_eq!(config.implemented_languages, vec!["en", "es"]);
    }
}
