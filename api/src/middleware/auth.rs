//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the configured HS256 secret and injects the caller's
//! [`SessionContext`] into the request. Requests without a valid token fail
//! with a `NotAuthenticated` domain exception.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use jb_core::{DomainException, ErrorMessageKey};
use jb_shared::SecurityConfig;

use crate::handlers::error::{ApiError, SessionTenant};

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id
    pub sub: String,
    pub tenant_id: i64,
    /// Expiry as seconds since the epoch
    pub exp: usize,
}

impl SessionClaims {
    /// Claims for `user_id` of `tenant_id`, valid for `ttl_seconds` from now
    pub fn new(user_id: impl Into<String>, tenant_id: i64, ttl_seconds: i64) -> Self {
        let exp = chrono::Utc::now().timestamp() + ttl_seconds;
        Self {
            sub: user_id.into(),
            tenant_id,
            exp: exp.max(0) as usize,
        }
    }

    /// Sign the claims with an HS256 secret
    pub fn encode(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: String,
    pub tenant_id: i64,
}

impl SessionContext {
    pub fn from_claims(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
        }
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    jwt_secret: Option<String>,
}

impl JwtAuth {
    /// Verify tokens with the configured secret; without one every request is rejected
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(secret.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: Option<String>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            match authenticate(&req, jwt_secret.as_deref()) {
                Ok(session) => {
                    req.extensions_mut().insert(session);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                // Answered as an error response so the error middleware can translate it
                Err(e) => Ok(req.error_response(ApiError::from(e)).map_into_right_body()),
            }
        })
    }
}

fn authenticate(req: &ServiceRequest, jwt_secret: Option<&str>) -> Result<SessionContext, DomainException> {
    let token = extract_bearer_token(req).ok_or_else(|| {
        log::debug!("Missing or malformed Authorization header");
        not_authenticated()
    })?;

    let secret = jwt_secret.ok_or_else(|| {
        log::warn!("Session token verification is not configured");
        not_authenticated()
    })?;

    verify_token(&token, secret).map_err(|e| {
        log::debug!("Session token rejected: {}", e);
        not_authenticated().with_source(e)
    })
}

fn not_authenticated() -> DomainException {
    DomainException::not_authenticated(Some(ErrorMessageKey::NotAuthenticated))
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn verify_token(token: &str, secret: &str) -> Result<SessionContext, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)?;
    Ok(SessionContext::from_claims(token_data.claims))
}

/// Extractor for routes behind [`JwtAuth`]
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| Error::from(ApiError::from(not_authenticated())));

        ready(result)
    }
}

impl SessionTenant for HttpRequest {
    fn tenant_id(&self) -> Option<i64> {
        self.extensions()
            .get::<SessionContext>()
            .map(|session| session.tenant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App, HttpResponse};

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_verify_token_round_trip() {
        let token = SessionClaims::new("user-1", 2, 300).encode("secret").unwrap();
        let session = verify_token(&token, "secret").unwrap();
        assert_eq!(session, SessionContext { user_id: "user-1".into(), tenant_id: 2 });

        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = SessionClaims::new("user-1", 2, -3600).encode("secret").unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }

    #[test]
    fn test_session_tenant_reads_extensions() {
        let req = actix_test::TestRequest::default().to_http_request();
        assert_eq!(req.tenant_id(), None);

        req.extensions_mut().insert(SessionContext {
            user_id: "user-1".into(),
            tenant_id: 7,
        });
        assert_eq!(req.tenant_id(), Some(7));
    }

    #[actix_web::test]
    async fn test_rejected_request_is_an_error_response() {
        let app = actix_test::init_service(
            App::new()
                .wrap(JwtAuth::with_secret("secret"))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let error = resp.response().error().expect("error attached to the response");
        let api_error = error.as_error::<ApiError>().expect("ApiError");
        let exception = api_error.inner().downcast_ref::<DomainException>().unwrap();
        assert_eq!(exception.resource_key(), Some(ErrorMessageKey::NotAuthenticated));
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_route() {
        let app = actix_test::init_service(
            App::new()
                .wrap(JwtAuth::with_secret("secret"))
                .route(
                    "/",
                    web::get().to(|session: SessionContext| async move {
                        HttpResponse::Ok().body(session.user_id)
                    }),
                ),
        )
        .await;

        let token = SessionClaims::new("user-1", 2, 300).encode("secret").unwrap();
        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "user-1");
    }
}
