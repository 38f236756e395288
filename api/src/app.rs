//! Application factory
//!
//! Builds the actix-web application from the shared state: middleware
//! stack, routes and the default handler.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use jb_core::ResourceNamespace;

use crate::dto::ErrorMessage;
use crate::middleware::{
    auth::JwtAuth, cors::create_cors, error_handler::ErrorHandlerMiddleware,
    language::{LanguageSetter, RequestLocale},
};
use crate::routes::{
    health::health_check,
    job_fields::{get_job_field, list_job_fields},
    pages::job_field_page,
    session::current_session,
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let responder = web::Data::new(state.error_responder());
    let language = LanguageSetter::from_config(&state.config.localization);
    let cors = create_cors(state.config.environment, &state.config.cors);
    let auth = JwtAuth::new(&state.config.security);

    App::new()
        .app_data(state)
        .app_data(responder)
        // Registration order is innermost first: the locale is selected
        // before any scope translates its errors.
        .wrap(language)
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .wrap(ErrorHandlerMiddleware::api())
                .route("/job-fields", web::get().to(list_job_fields))
                .route("/job-fields/{name}", web::get().to(get_job_field))
                .service(
                    web::resource("/session")
                        .wrap(auth)
                        .route(web::get().to(current_session)),
                ),
        )
        .service(
            web::scope("/pages")
                .wrap(ErrorHandlerMiddleware::pages())
                .route("/job-fields/{name}", web::get().to(job_field_page)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found(state: web::Data<AppState>, locale: RequestLocale) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorMessage {
        message: state
            .translator(&locale)
            .translate("NotFound", ResourceNamespace::Ui),
        ..Default::default()
    })
}
