use actix_web::{web, HttpResponse};

use jb_core::{DomainException, ErrorItem, ErrorMessageKey, ExceptionKind};

use super::AppState;
use crate::dto::JobField;
use crate::handlers::error::ApiError;
use crate::middleware::language::RequestLocale;

/// Handler for GET /api/v1/job-fields
///
/// Returns the standard job posting fields with labels in the request locale.
///
/// ## Success (200 OK)
/// ```json
/// [{ "name": "ZipCode", "label": "Código postal", "required": false }]
/// ```
pub async fn list_job_fields(state: web::Data<AppState>, locale: RequestLocale) -> HttpResponse {
    let mut fields = JobField::standard();
    state.translator(&locale).translate_labels(&mut fields);
    HttpResponse::Ok().json(fields)
}

/// Handler for GET /api/v1/job-fields/{name}
///
/// ## Errors
/// - 500 Internal Server Error: `InvalidCustomFieldName` when no field has that name
pub async fn get_job_field(
    state: web::Data<AppState>,
    locale: RequestLocale,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    let mut fields: Vec<JobField> = JobField::standard()
        .into_iter()
        .filter(|field| field.name.eq_ignore_ascii_case(name.trim()))
        .collect();

    if fields.is_empty() {
        return Err(DomainException::with_items(
            ExceptionKind::JobPosting,
            ErrorMessageKey::InvalidCustomFieldName,
            vec![ErrorItem::new(format!("Unknown job field '{}'", name))],
        )
        .into());
    }

    state.translator(&locale).translate_labels(&mut fields);
    Ok(HttpResponse::Ok().json(&fields[0]))
}
