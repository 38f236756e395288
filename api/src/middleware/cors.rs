//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin. Other environments only accept the
//! origins listed in the `cors` configuration section. Browser clients need
//! `Accept-Language` to choose the response locale and can read the
//! localized error message header.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use jb_shared::{CorsConfig, Environment};

use crate::handlers::error::ERROR_MESSAGE_HEADER;

/// Creates a CORS middleware instance configured for the given environment
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static(ERROR_MESSAGE_HEADER)])
        .max_age(config.max_age);

    if environment.is_development() {
        log::info!("Configuring CORS for development environment");
        return cors.allow_any_origin();
    }

    log::info!("Configuring CORS for {} environment", environment);
    config.origins().fold(cors, |cors, origin| {
        log::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_production_accepts_only_configured_origins() {
        let config = CorsConfig {
            allowed_origins: vec![String::from("https://jobs.example.com")],
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(Environment::Production, &config))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://jobs.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://jobs.example.com"
        );
    }

    #[actix_web::test]
    async fn test_development_accepts_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(Environment::Development, &CorsConfig::default()))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some());
    }
}
