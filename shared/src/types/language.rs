//! Language tags and request locale selection

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::LocalizationConfig;

/// Language used when nothing else is configured
pub const FALLBACK_LANGUAGE: &str = "en";

/// A client supplied language tag such as `en-US`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two characters of the tag, lowercased.
    ///
    /// Only this prefix takes part in locale selection; tags shorter than
    /// two characters have none.
    pub fn primary_code(&self) -> Option<String> {
        let code: String = self.0.chars().take(2).collect();
        if code.chars().count() < 2 {
            None
        } else {
            Some(code.to_lowercase())
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client language preferences, most preferred first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePreferences(Vec<LanguageTag>);

impl LanguagePreferences {
    /// Preferences in the given order
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self(tags.into_iter().map(LanguageTag::new).collect())
    }

    /// Parse an `Accept-Language` header value.
    ///
    /// Entries are ordered by descending quality, keeping header order for
    /// equal weights. A missing or unparsable `q` counts as 1.0; entries with
    /// `q=0` and the `*` wildcard are dropped.
    pub fn from_accept_language(header: &str) -> Self {
        let mut weighted: Vec<(LanguageTag, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }
                let quality = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .next()
                    .and_then(|value| value.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                if quality <= 0.0 {
                    return None;
                }
                Some((LanguageTag::new(tag), quality))
            })
            .collect();

        // sort_by is stable, so equal weights keep header order
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Self(weighted.into_iter().map(|(tag, _)| tag).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.0.iter()
    }
}

/// Picks the locale a request is served in
#[derive(Debug, Clone)]
pub struct LocaleSelector {
    implemented: Vec<String>,
    default_language: String,
}

impl LocaleSelector {
    /// Create a selector; a blank or missing default becomes `en`
    pub fn new<I, T>(implemented: I, default_language: Option<&str>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let default_language = default_language
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .unwrap_or(FALLBACK_LANGUAGE)
            .to_string();

        Self {
            implemented: implemented
                .into_iter()
                .map(|language| language.into().to_lowercase())
                .collect(),
            default_language,
        }
    }

    pub fn from_config(config: &LocalizationConfig) -> Self {
        Self::new(
            config.implemented_languages.iter().cloned(),
            Some(config.default_language()),
        )
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn implemented_languages(&self) -> &[String] {
        &self.implemented
    }

    /// Return the two-letter code of the first preference found in any
    /// implemented language entry, or the default language.
    pub fn select(&self, preferences: &LanguagePreferences) -> String {
        preferences
            .iter()
            .filter_map(LanguageTag::primary_code)
            .find(|code| self.implemented.iter().any(|language| language.contains(code.as_str())))
            .unwrap_or_else(|| self.default_language.clone())
    }
}
