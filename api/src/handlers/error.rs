//! Conversion of captured errors into localized API error responses.
//!
//! Every error that escapes a handler is classified, logged and turned into
//! an [`ErrorMessage`] body. Domain exceptions keep their resource key and
//! field errors; anything else becomes the default error. Technical detail
//! is only exposed in development or to users of the root tenant.

use std::fmt;
use std::sync::Arc;

use actix_web::{
    http::{
        header::{HeaderName, HeaderValue},
        StatusCode,
    },
    HttpResponse, ResponseError,
};

use jb_core::{DomainException, EntityValidationError, ErrorItem, ErrorMessageKey, ExceptionKind};
use jb_shared::config::{DEFAULT_ORG_ROOT_ID, ORG_ROOT_ID_KEY};
use jb_shared::{Environment, Settings, FALLBACK_LANGUAGE};

use crate::dto::ErrorMessage;
use crate::i18n::{ResourceCatalog, ResourceLookup, Translator};

/// Response header carrying the localized message
pub const ERROR_MESSAGE_HEADER: &str = "x-error-message";

const DETAIL_SEPARATOR: &str = " -- ";

/// How an error is reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    DomainRuleViolation,
    NotAuthenticated,
    UnauthorizedAction,
    Unexpected,
}

impl ErrorClass {
    pub fn of(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DomainException>().map(DomainException::kind) {
            Some(ExceptionKind::Business | ExceptionKind::JobPosting) => ErrorClass::DomainRuleViolation,
            Some(ExceptionKind::NotAuthenticated) => ErrorClass::NotAuthenticated,
            Some(ExceptionKind::UnauthorizedAction) => ErrorClass::UnauthorizedAction,
            None => ErrorClass::Unexpected,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorClass::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ErrorClass::UnauthorizedAction => StatusCode::FORBIDDEN,
            ErrorClass::DomainRuleViolation | ErrorClass::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Tenant of the caller, when the request carries a session
pub trait SessionTenant {
    fn tenant_id(&self) -> Option<i64>;
}

/// Caller without a session
pub struct NoSession;

impl SessionTenant for NoSession {
    fn tenant_id(&self) -> Option<i64> {
        None
    }
}

/// Every message of the error chain, outermost first, joined with `" -- "`
pub fn technical_details(error: &anyhow::Error) -> String {
    error
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(DETAIL_SEPARATOR)
}

/// Whether the caller may see technical details.
///
/// True in development, or when the caller belongs to the tenant configured
/// as `security.org_root_id`. Anything that cannot be determined counts as
/// false.
pub fn show_technical_details(
    environment: Environment,
    settings: &Settings,
    session: &dyn SessionTenant,
) -> bool {
    if environment.is_development() {
        return true;
    }

    let Some(tenant_id) = session.tenant_id() else {
        return false;
    };

    match settings.get_or(ORG_ROOT_ID_KEY, DEFAULT_ORG_ROOT_ID) {
        Ok(root_id) => tenant_id == root_id,
        Err(err) => {
            log::warn!("Hiding technical details: {}", err);
            false
        }
    }
}

/// Everything needed to translate one error
#[derive(Clone, Copy)]
pub struct ErrorContext<'a> {
    pub translator: Translator<'a>,
    pub environment: Environment,
    pub settings: &'a Settings,
    pub session: &'a dyn SessionTenant,
}

impl ErrorContext<'_> {
    pub fn show_technical_details(&self) -> bool {
        show_technical_details(self.environment, self.settings, self.session)
    }
}

/// Status, reason and body of a translated error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedError {
    pub status: StatusCode,
    /// Localized message, sent as the `X-Error-Message` header
    pub reason: String,
    pub body: ErrorMessage,
}

impl TranslatedError {
    pub fn into_response(self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        // Non-ASCII messages travel in the body only
        if !self.reason.is_empty() && self.reason.is_ascii() {
            if let Ok(value) = HeaderValue::from_str(&self.reason) {
                builder.insert_header((HeaderName::from_static(ERROR_MESSAGE_HEADER), value));
            }
        }
        builder.json(self.body)
    }
}

/// Map an error to its status and localized body
pub fn translate_error(error: &anyhow::Error, context: &ErrorContext<'_>) -> TranslatedError {
    let status = ErrorClass::of(error).status();
    let tech_details = if context.show_technical_details() {
        technical_details(error)
    } else {
        String::new()
    };

    let body = match error.downcast_ref::<DomainException>() {
        Some(exception) => ErrorMessage {
            tech_details,
            message: exception
                .resource_key()
                .map(|key| context.translator.translate_error(key))
                .unwrap_or_default(),
            error_items: exception
                .error_items()
                .map(<[ErrorItem]>::to_vec)
                .unwrap_or_default(),
            resource_key: exception.resource_key_str().to_string(),
        },
        None => ErrorMessage {
            tech_details,
            message: context
                .translator
                .translate_error(ErrorMessageKey::DefaultErrorMessage),
            error_items: Vec::new(),
            resource_key: String::new(),
        },
    };

    TranslatedError {
        status,
        reason: body.message.clone(),
        body,
    }
}

/// Log entity validation details found in the chain, then the error itself
pub fn log_error(error: &anyhow::Error) {
    for cause in error.chain() {
        if let Some(validation) = cause.downcast_ref::<EntityValidationError>() {
            for line in validation.log_lines() {
                log::error!("{}", line);
            }
        }
    }
    log::error!("Unhandled API error: {:?}", error);
}

/// Log and translate an error into the response sent to the client
pub fn handle_error(error: &anyhow::Error, context: &ErrorContext<'_>) -> HttpResponse {
    log_error(error);
    translate_error(error, context).into_response()
}

/// Error returned by API handlers.
///
/// Wraps any error; the error handling middleware replaces the response with
/// the translation for the request's locale and session.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl ApiError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        ErrorClass::of(&self.0).status()
    }

    /// Response used when no error handling middleware wraps the route:
    /// neutral language, no session, details hidden.
    fn error_response(&self) -> HttpResponse {
        match ResourceCatalog::bundled() {
            Ok(resources) => {
                let settings = Settings::default();
                let context = ErrorContext {
                    translator: Translator::new(resources.as_ref(), FALLBACK_LANGUAGE),
                    environment: Environment::Production,
                    settings: &settings,
                    session: &NoSession,
                };
                translate_error(&self.0, &context).into_response()
            }
            Err(err) => {
                log::error!("Bundled resources unavailable: {}", err);
                HttpResponse::build(self.status_code()).json(ErrorMessage::default())
            }
        }
    }
}

/// Translates errors with the application's resources and settings
#[derive(Clone)]
pub struct ErrorResponder {
    resources: Arc<dyn ResourceLookup>,
    settings: Arc<Settings>,
    environment: Environment,
}

impl ErrorResponder {
    pub fn new(
        resources: Arc<dyn ResourceLookup>,
        settings: Arc<Settings>,
        environment: Environment,
    ) -> Self {
        Self {
            resources,
            settings,
            environment,
        }
    }

    pub fn context<'a>(&'a self, locale: &'a str, session: &'a dyn SessionTenant) -> ErrorContext<'a> {
        ErrorContext {
            translator: Translator::new(self.resources.as_ref(), locale),
            environment: self.environment,
            settings: &self.settings,
            session,
        }
    }

    /// API error response for `error`
    pub fn respond(&self, error: &anyhow::Error, locale: &str, session: &dyn SessionTenant) -> HttpResponse {
        handle_error(error, &self.context(locale, session))
    }
}
