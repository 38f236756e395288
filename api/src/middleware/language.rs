//! Request locale selection.
//!
//! [`LanguageSetter`] reads `Accept-Language`, picks the first preference the
//! application implements and stores it in the request extensions, where
//! handlers read it through [`RequestLocale`] or [`LocaleExt`].

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::ACCEPT_LANGUAGE,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use std::future::{ready, Ready};
use std::rc::Rc;

use jb_shared::{LanguagePreferences, LocaleSelector, LocalizationConfig, FALLBACK_LANGUAGE};

/// Locale selected for the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale(pub String);

impl RequestLocale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestLocale {
    fn default() -> Self {
        Self(FALLBACK_LANGUAGE.to_string())
    }
}

/// Middleware factory selecting the locale of every request
#[derive(Debug, Clone)]
pub struct LanguageSetter {
    selector: Rc<LocaleSelector>,
}

impl LanguageSetter {
    pub fn new(selector: LocaleSelector) -> Self {
        Self {
            selector: Rc::new(selector),
        }
    }

    pub fn from_config(config: &LocalizationConfig) -> Self {
        Self::new(LocaleSelector::from_config(config))
    }
}

impl<S, B> Transform<S, ServiceRequest> for LanguageSetter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LanguageSetterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LanguageSetterMiddleware {
            service,
            selector: Rc::clone(&self.selector),
        }))
    }
}

pub struct LanguageSetterMiddleware<S> {
    service: S,
    selector: Rc<LocaleSelector>,
}

impl<S, B> Service<ServiceRequest> for LanguageSetterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let preferences = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(LanguagePreferences::from_accept_language)
            .unwrap_or_default();

        let locale = self.selector.select(&preferences);
        log::debug!("Request locale: {}", locale);
        req.extensions_mut().insert(RequestLocale(locale));

        self.service.call(req)
    }
}

/// Access to the request locale
pub trait LocaleExt {
    /// Selected locale, or the neutral language when none was selected
    fn locale(&self) -> String;
}

impl LocaleExt for HttpRequest {
    fn locale(&self) -> String {
        self.extensions()
            .get::<RequestLocale>()
            .map(|locale| locale.0.clone())
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
    }
}

impl LocaleExt for ServiceRequest {
    fn locale(&self) -> String {
        self.request().locale()
    }
}

impl FromRequest for RequestLocale {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let locale = req.extensions().get::<RequestLocale>().cloned().unwrap_or_default();
        ready(Ok(locale))
    }
}
