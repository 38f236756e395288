//! Domain exceptions raised when a business rule is violated.
//!
//! An exception carries the resource key of its user facing message, the
//! field errors and extra content that explain it, and an optional inner
//! cause. The technical (log only) message is fixed at construction.

use std::error::Error as StdError;
use std::fmt;

use crate::domain::ErrorItem;
use crate::resources::ErrorMessageKey;

/// Boxed inner cause of a domain exception
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

const ITEM_SEPARATOR: &str = " ";
const CONTENT_SEPARATOR: &str = " : ";

/// What kind of failure a domain exception reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    /// A general business rule violation
    Business,
    /// A violation raised while creating or editing a job posting
    JobPosting,
    /// The caller has no valid session
    NotAuthenticated,
    /// The caller is authenticated but may not perform the action
    UnauthorizedAction,
}

impl ExceptionKind {
    /// Whether this kind reports an expected business rule violation
    pub fn is_domain_rule_violation(&self) -> bool {
        matches!(self, ExceptionKind::Business | ExceptionKind::JobPosting)
    }
}

/// An expected, user facing failure.
///
/// Immutable once built: constructors take every field, and
/// [`with_source`](Self::with_source) only chains onto a value that has not
/// been raised yet.
#[derive(Debug)]
pub struct DomainException {
    kind: ExceptionKind,
    resource_key: Option<ErrorMessageKey>,
    error_items: Option<Vec<ErrorItem>>,
    additional_content: Option<Vec<String>>,
    source: Option<BoxError>,
    technical_message: String,
}

impl DomainException {
    /// Exception described by its resource key alone.
    ///
    /// The key name doubles as the technical message.
    pub fn new(kind: ExceptionKind, resource_key: ErrorMessageKey) -> Self {
        Self::build(kind, Some(resource_key), None, None, resource_key.as_str().to_string())
    }

    /// Exception with an explicit technical message, used verbatim
    pub fn with_log_message(
        kind: ExceptionKind,
        resource_key: ErrorMessageKey,
        log_message: impl Into<String>,
        additional_content: Option<Vec<String>>,
    ) -> Self {
        Self::build(kind, Some(resource_key), None, additional_content, log_message.into())
    }

    /// Exception explained by field errors.
    ///
    /// The technical message is every item message followed by a space.
    pub fn with_items(kind: ExceptionKind, resource_key: ErrorMessageKey, error_items: Vec<ErrorItem>) -> Self {
        let technical_message = items_message(&error_items);
        Self::build(kind, Some(resource_key), Some(error_items), None, technical_message)
    }

    /// Exception explained by field errors and/or additional content.
    ///
    /// The technical message joins items then content with `" : "`.
    pub fn with_items_and_content(
        kind: ExceptionKind,
        resource_key: ErrorMessageKey,
        error_items: Option<Vec<ErrorItem>>,
        additional_content: Option<Vec<String>>,
    ) -> Self {
        let technical_message =
            items_and_content_message(error_items.as_deref(), additional_content.as_deref());
        Self::build(kind, Some(resource_key), error_items, additional_content, technical_message)
    }

    /// General business rule violation
    pub fn business(resource_key: ErrorMessageKey, log_message: impl Into<String>) -> Self {
        Self::with_log_message(ExceptionKind::Business, resource_key, log_message, None)
    }

    /// Job posting rule violation
    pub fn job_posting(resource_key: ErrorMessageKey, log_message: impl Into<String>) -> Self {
        Self::with_log_message(ExceptionKind::JobPosting, resource_key, log_message, None)
    }

    pub fn not_authenticated(resource_key: Option<ErrorMessageKey>) -> Self {
        Self::build(
            ExceptionKind::NotAuthenticated,
            resource_key,
            None,
            None,
            String::from("Not authenticated"),
        )
    }

    pub fn unauthorized_action(resource_key: Option<ErrorMessageKey>) -> Self {
        Self::build(
            ExceptionKind::UnauthorizedAction,
            resource_key,
            None,
            None,
            String::from("Unauthorized action"),
        )
    }

    /// Attach the error that caused this one
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn build(
        kind: ExceptionKind,
        resource_key: Option<ErrorMessageKey>,
        error_items: Option<Vec<ErrorItem>>,
        additional_content: Option<Vec<String>>,
        technical_message: String,
    ) -> Self {
        tracing::debug!(?kind, ?resource_key, %technical_message, "domain exception raised");

        Self {
            kind,
            resource_key,
            error_items,
            additional_content,
            source: None,
            technical_message,
        }
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn resource_key(&self) -> Option<ErrorMessageKey> {
        self.resource_key
    }

    /// Name of the resource key, or an empty string when there is none
    pub fn resource_key_str(&self) -> &'static str {
        self.resource_key.map(|key| key.as_str()).unwrap_or("")
    }

    pub fn error_items(&self) -> Option<&[ErrorItem]> {
        self.error_items.as_deref()
    }

    /// Additional content lines; empty when none were attached
    pub fn additional_content(&self) -> &[String] {
        self.additional_content.as_deref().unwrap_or(&[])
    }

    pub fn technical_message(&self) -> &str {
        &self.technical_message
    }
}

impl fmt::Display for DomainException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.technical_message)
    }
}

impl StdError for DomainException {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// `"A B "`: each item message followed by a space, trailing one kept
pub(crate) fn items_message(items: &[ErrorItem]) -> String {
    items.iter().fold(String::new(), |mut message, item| {
        message.push_str(&item.message);
        message.push_str(ITEM_SEPARATOR);
        message
    })
}

/// `"A : C"`: items then content, each followed by `" : "`, cut just before
/// the character preceding the last colon.
pub(crate) fn items_and_content_message(items: Option<&[ErrorItem]>, content: Option<&[String]>) -> String {
    let parts = items
        .unwrap_or(&[])
        .iter()
        .map(|item| item.message.as_str())
        .chain(content.unwrap_or(&[]).iter().map(String::as_str));

    let mut message = String::new();
    for part in parts {
        message.push_str(part);
        message.push_str(CONTENT_SEPARATOR);
    }

    // The last colon is always the one just appended, preceded by a space.
    match message.rfind(':') {
        Some(index) => message.truncate(index.saturating_sub(1)),
        None => message.clear(),
    }
    message
}
