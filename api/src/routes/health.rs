use actix_web::{web, HttpResponse};

use jb_core::ResourceNamespace;

use super::AppState;
use crate::middleware::language::RequestLocale;

/// Handler for GET /health
pub async fn health_check(state: web::Data<AppState>, locale: RequestLocale) -> HttpResponse {
    let message = state
        .translator(&locale)
        .translate("HealthOk", ResourceNamespace::Message);

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jobboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment.to_string(),
        "locale": locale.as_str(),
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
