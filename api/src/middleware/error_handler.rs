use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::handlers::error::{ApiError, ErrorResponder};
use crate::handlers::page_error::is_xhr;
use crate::middleware::language::LocaleExt;

/// Kind of client the wrapped routes serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    /// JSON API: every error becomes an `ErrorMessage` body
    Api,
    /// Server-rendered pages: 500s become an error page or a JSON string
    Pages,
}

/// Middleware replacing error responses with their localized translation.
///
/// Needs an [`ErrorResponder`] in the app data. Must be wrapped inside
/// [`LanguageSetter`](super::LanguageSetter) so the request locale is known.
pub struct ErrorHandlerMiddleware {
    surface: ErrorSurface,
}

impl ErrorHandlerMiddleware {
    pub fn api() -> Self {
        Self {
            surface: ErrorSurface::Api,
        }
    }

    pub fn pages() -> Self {
        Self {
            surface: ErrorSurface::Pages,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
            surface: self.surface,
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
    surface: ErrorSurface,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let surface = self.surface;

        Box::pin(async move {
            // Errors returned as `Err` carry no request to answer with; inner
            // middleware reports failures as error responses instead.
            let res = service.call(req).await?;

            let replacement = res
                .response()
                .error()
                .and_then(|error| render(surface, res.request(), error));

            match replacement {
                Some(response) => Ok(res.into_response(response).map_into_right_body()),
                None => Ok(res.map_into_left_body()),
            }
        })
    }
}

/// Translated response for `error`, or `None` to keep the original response.
///
/// Errors raised as [`ApiError`] are always translated. Other framework
/// errors are translated as unexpected failures when they are server errors
/// and left untouched otherwise.
fn render(surface: ErrorSurface, request: &HttpRequest, error: &Error) -> Option<HttpResponse> {
    let Some(responder) = request.app_data::<web::Data<ErrorResponder>>() else {
        log::warn!("No error responder registered, keeping the original error response");
        return None;
    };

    let wrapped;
    let captured = match error.as_error::<ApiError>() {
        Some(api_error) => api_error.inner(),
        None if error.as_response_error().status_code().is_server_error() => {
            wrapped = anyhow::anyhow!("{}", error);
            &wrapped
        }
        None => return None,
    };

    let locale = request.locale();
    match surface {
        ErrorSurface::Api => Some(responder.respond(captured, &locale, request)),
        ErrorSurface::Pages => responder.respond_page(captured, &locale, request, is_xhr(request)),
    }
}
