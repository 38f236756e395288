//! Type definitions module
//!
//! - `language` - Language tags, client preferences and locale selection

pub mod language;

pub use language::{LanguagePreferences, LanguageTag, LocaleSelector, FALLBACK_LANGUAGE};
