//! Integration tests for server-rendered page error handling

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::{
            header::{ACCEPT_LANGUAGE, CONTENT_TYPE},
            StatusCode,
        },
        test, web, App, HttpResponse,
    };

    use jb_api::app::create_app;
    use jb_api::handlers::error::{ApiError, ErrorResponder};
    use jb_api::i18n::{ResourceCatalog, ResourceLookup};
    use jb_api::middleware::{ErrorHandlerMiddleware, LanguageSetter};
    use jb_core::{DomainException, ErrorMessageKey};
    use jb_api::routes::AppState;
    use jb_shared::{AppConfig, Environment, LocaleSelector, Settings};

    fn responder(environment: Environment) -> web::Data<ErrorResponder> {
        let resources: Arc<dyn ResourceLookup> = ResourceCatalog::bundled().unwrap();
        web::Data::new(ErrorResponder::new(
            resources,
            Arc::new(Settings::default()),
            environment,
        ))
    }

    async fn broken_page() -> Result<HttpResponse, ApiError> {
        Err(anyhow::anyhow!("template <main> missing").into())
    }

    async fn denied_page() -> Result<HttpResponse, ApiError> {
        Err(DomainException::unauthorized_action(Some(ErrorMessageKey::AccessDenied)).into())
    }

    macro_rules! pages_app {
        ($environment:expr) => {
            test::init_service(
                App::new()
                    .app_data(responder($environment))
                    .wrap(ErrorHandlerMiddleware::pages())
                    .wrap(LanguageSetter::new(LocaleSelector::new(["en", "es"], Some("en"))))
                    .route("/broken", web::get().to(broken_page))
                    .route("/denied", web::get().to(denied_page)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_xhr_gets_json_message() {
        let app = pages_app!(Environment::Production);

        let req = test::TestRequest::get()
            .uri("/broken")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let message: String = test::read_body_json(resp).await;
        assert_eq!(message, "An unexpected error occurred. Please try again later.");
    }

    #[actix_web::test]
    async fn test_browser_gets_html_page() {
        let app = pages_app!(Environment::Production);

        let req = test::TestRequest::get()
            .uri("/broken")
            .insert_header((ACCEPT_LANGUAGE, "es"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .starts_with("text/html"));

        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("<html lang=\"es\">"));
        assert!(page.contains("Algo salió mal"));
        assert!(page.contains("Se produjo un error inesperado. Inténtelo de nuevo más tarde."));
        assert!(!page.contains("template"));
    }

    #[actix_web::test]
    async fn test_development_shows_escaped_error_message() {
        let app = pages_app!(Environment::Development);

        let req = test::TestRequest::get().uri("/broken").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("template &lt;main&gt; missing"));

        let req = test::TestRequest::get()
            .uri("/broken")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();
        let message: String = test::call_and_read_body_json(&app, req).await;
        assert_eq!(message, "template <main> missing");
    }

    #[actix_web::test]
    async fn test_authorization_failures_are_not_handled() {
        let app = pages_app!(Environment::Production);

        let req = test::TestRequest::get().uri("/denied").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .starts_with("application/json"));
    }

    fn app_state() -> web::Data<AppState> {
        let settings = Settings::default();
        let config = AppConfig::from_settings(&settings, Environment::Production).unwrap();
        let resources: Arc<dyn ResourceLookup> = ResourceCatalog::bundled().unwrap();
        web::Data::new(AppState::new(config, settings, resources))
    }

    #[actix_web::test]
    async fn test_page_scope_renders_labels() {
        let app = test::init_service(create_app(app_state())).await;

        let req = test::TestRequest::get()
            .uri("/pages/job-fields/ZipCode")
            .insert_header((ACCEPT_LANGUAGE, "es"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("<h1>Código postal</h1>"));
    }

    #[actix_web::test]
    async fn test_page_scope_answers_errors_with_error_page() {
        let app = test::init_service(create_app(app_state())).await;

        let req = test::TestRequest::get()
            .uri("/pages/job-fields/Salary")
            .insert_header((ACCEPT_LANGUAGE, "es"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .starts_with("text/html"));

        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("Se produjo un error inesperado. Inténtelo de nuevo más tarde."));
        assert!(!page.contains("Salary"));

        let req = test::TestRequest::get()
            .uri("/pages/job-fields/Salary")
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_request();
        let message: String = test::call_and_read_body_json(&app, req).await;
        assert_eq!(message, "An unexpected error occurred. Please try again later.");
    }
}
