//! Server-rendered pages

use actix_web::{http::header::ContentType, web, HttpResponse};

use jb_core::{DomainException, ErrorItem, ErrorMessageKey, ExceptionKind};

use super::AppState;
use crate::dto::JobField;
use crate::handlers::error::ApiError;
use crate::handlers::page_error::escape_html;
use crate::middleware::language::RequestLocale;

/// Handler for GET /pages/job-fields/{name}
///
/// Renders the field label in the request locale. An unknown field name is
/// answered with the localized error page.
pub async fn job_field_page(
    state: web::Data<AppState>,
    locale: RequestLocale,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    let mut field = JobField::standard()
        .into_iter()
        .find(|field| field.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            DomainException::with_items(
                ExceptionKind::JobPosting,
                ErrorMessageKey::InvalidCustomFieldName,
                vec![ErrorItem::new(format!("Unknown job field '{}'", name))],
            )
        })?;

    state
        .translator(&locale)
        .translate_labels(std::slice::from_mut(&mut field));

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<body>\n<h1>{}</h1>\n</body>\n</html>\n",
        escape_html(locale.as_str()),
        escape_html(&field.label)
    )))
}
