//! Route handlers and the state they share

pub mod health;
pub mod job_fields;
pub mod pages;
pub mod session;

use std::sync::Arc;

use jb_shared::{AppConfig, Settings};

use crate::handlers::error::ErrorResponder;
use crate::i18n::{ResourceLookup, Translator};
use crate::middleware::language::RequestLocale;

/// Application state shared by every worker
pub struct AppState {
    pub config: AppConfig,
    pub settings: Arc<Settings>,
    pub resources: Arc<dyn ResourceLookup>,
}

impl AppState {
    pub fn new(config: AppConfig, settings: Settings, resources: Arc<dyn ResourceLookup>) -> Self {
        Self {
            config,
            settings: Arc::new(settings),
            resources,
        }
    }

    /// Translator for the request locale
    pub fn translator<'a>(&'a self, locale: &'a RequestLocale) -> Translator<'a> {
        Translator::new(self.resources.as_ref(), locale.as_str())
    }

    pub fn error_responder(&self) -> ErrorResponder {
        ErrorResponder::new(
            Arc::clone(&self.resources),
            Arc::clone(&self.settings),
            self.config.environment,
        )
    }
}
