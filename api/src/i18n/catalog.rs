//! Localized string tables loaded from TOML.
//!
//! A catalog maps namespace, key and locale to text. The bundled catalog is
//! compiled into the binary; deployments may replace it with a file named by
//! `localization.resources_path`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use jb_core::ResourceNamespace;
use jb_shared::FALLBACK_LANGUAGE;

/// Resources shipped with the binary
const BUNDLED_RESOURCES: &str = include_str!("../../i18n/resources.toml");

static BUNDLED_CATALOG: Lazy<Result<Arc<ResourceCatalog>, CatalogError>> =
    Lazy::new(|| ResourceCatalog::from_toml(BUNDLED_RESOURCES).map(Arc::new));

/// Read access to localized strings
pub trait ResourceLookup: Send + Sync {
    /// Text for `key` in `namespace`, resolved for `locale` with fallback.
    /// `None` when the key has no entry in any candidate locale.
    fn lookup(&self, namespace: ResourceNamespace, key: &str, locale: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("failed to read resource file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse resources: {0}")]
    Parse(String),
}

/// key -> locale -> text
type Entries = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_neutral_language")]
    neutral_language: String,
    #[serde(default)]
    ui: Entries,
    #[serde(default)]
    error: Entries,
    #[serde(default)]
    label: Entries,
    #[serde(default)]
    message: Entries,
}

fn default_neutral_language() -> String {
    FALLBACK_LANGUAGE.to_string()
}

/// Immutable set of localized strings, one table per namespace
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    neutral_language: String,
    tables: HashMap<ResourceNamespace, Entries>,
}

impl ResourceCatalog {
    /// Parse a catalog from TOML text. Locale names are matched case-insensitively.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut tables = HashMap::with_capacity(ResourceNamespace::ALL.len());
        tables.insert(ResourceNamespace::Ui, normalize(file.ui));
        tables.insert(ResourceNamespace::Error, normalize(file.error));
        tables.insert(ResourceNamespace::Label, normalize(file.label));
        tables.insert(ResourceNamespace::Message, normalize(file.message));

        Ok(Self {
            neutral_language: file.neutral_language.trim().to_lowercase(),
            tables,
        })
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> Result<Arc<Self>, CatalogError> {
        (*BUNDLED_CATALOG).clone()
    }

    /// Load the catalog at `path`, or the bundled one when no path is
    /// configured or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Arc<Self>, CatalogError> {
        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                let catalog = Self::from_toml(&content)?;
                log::info!("Loaded localized resources from {}", path.display());
                Ok(Arc::new(catalog))
            }
            Some(path) => {
                log::warn!(
                    "Resource file {} not found, using bundled resources",
                    path.display()
                );
                Self::bundled()
            }
            None => Self::bundled(),
        }
    }

    pub fn neutral_language(&self) -> &str {
        &self.neutral_language
    }

    /// Keys defined in a namespace, in no particular order
    pub fn keys(&self, namespace: ResourceNamespace) -> impl Iterator<Item = &str> {
        self.tables
            .get(&namespace)
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }
}

impl ResourceLookup for ResourceCatalog {
    fn lookup(&self, namespace: ResourceNamespace, key: &str, locale: &str) -> Option<&str> {
        let translations = self.tables.get(&namespace)?.get(key)?;
        candidate_locales(locale, &self.neutral_language)
            .iter()
            .find_map(|candidate| translations.get(candidate))
            .map(String::as_str)
    }
}

/// `es-MX` resolves through `es-mx`, `es`, then the neutral language
fn candidate_locales(locale: &str, neutral_language: &str) -> Vec<String> {
    let exact = locale.trim().to_lowercase();
    let mut candidates = Vec::with_capacity(3);

    if let Some(language) = exact.split(['-', '_']).next() {
        if !exact.is_empty() {
            candidates.push(exact.clone());
        }
        if !language.is_empty() && language != exact {
            candidates.push(language.to_string());
        }
    }
    if !candidates.iter().any(|candidate| candidate == neutral_language) {
        candidates.push(neutral_language.to_string());
    }
    candidates
}

fn normalize(entries: Entries) -> Entries {
    entries
        .into_iter()
        .map(|(key, translations)| {
            let translations = translations
                .into_iter()
                .map(|(locale, text)| (locale.trim().to_lowercase(), text))
                .collect();
            (key, translations)
        })
        .collect()
}
