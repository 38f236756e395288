use actix_web::HttpResponse;
use serde::Serialize;

use crate::middleware::auth::SessionContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub tenant_id: i64,
}

/// Handler for GET /api/v1/session
///
/// Requires a Bearer session token; answers 401 with a localized
/// `NotAuthenticated` error otherwise.
pub async fn current_session(session: SessionContext) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        user_id: session.user_id,
        tenant_id: session.tenant_id,
    })
}
