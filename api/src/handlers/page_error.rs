//! Error responses for server-rendered pages.
//!
//! Only errors reported as 500 are handled here; authentication and
//! authorization failures keep their original response. Script requests get
//! the message as a JSON string, browsers get an HTML error page.

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpRequest, HttpResponse,
};

use jb_core::{ErrorMessageKey, ResourceNamespace};

use super::error::{ErrorClass, ErrorContext, ErrorResponder, SessionTenant};

const XHR_HEADER: &str = "X-Requested-With";
const XHR_VALUE: &str = "XMLHttpRequest";

/// Whether the request was sent by page script rather than navigation
pub fn is_xhr(request: &HttpRequest) -> bool {
    request
        .headers()
        .get(XHR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case(XHR_VALUE))
        .unwrap_or(false)
}

/// Build the page error response, or `None` when the error is not a 500
pub fn handle_page_error(
    error: &anyhow::Error,
    context: &ErrorContext<'_>,
    xhr: bool,
) -> Option<HttpResponse> {
    if ErrorClass::of(error).status() != StatusCode::INTERNAL_SERVER_ERROR {
        return None;
    }

    log::error!("Unhandled page error: {}", error.root_cause());

    let message = if context.show_technical_details() {
        error.to_string()
    } else {
        context
            .translator
            .translate_error(ErrorMessageKey::DefaultErrorMessage)
    };

    if xhr {
        return Some(HttpResponse::InternalServerError().json(message));
    }

    let title = ui_text(context, "ErrorPageTitle", "Error");
    let heading = ui_text(context, "ErrorPageHeading", "Error");
    Some(
        HttpResponse::InternalServerError()
            .content_type(ContentType::html())
            .body(render_error_page(context.translator.locale(), &title, &heading, &message)),
    )
}

impl ErrorResponder {
    /// Page error response for `error`, or `None` when it is not a 500
    pub fn respond_page(
        &self,
        error: &anyhow::Error,
        locale: &str,
        session: &dyn SessionTenant,
        xhr: bool,
    ) -> Option<HttpResponse> {
        handle_page_error(error, &self.context(locale, session), xhr)
    }
}

fn ui_text(context: &ErrorContext<'_>, key: &str, fallback: &str) -> String {
    let text = context.translator.translate(key, ResourceNamespace::Ui);
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

fn render_error_page(locale: &str, title: &str, heading: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{}\">\n\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n<h1>{}</h1>\n<p class=\"error-message\">{}</p>\n</body>\n\
         </html>\n",
        escape_html(locale),
        escape_html(title),
        escape_html(heading),
        escape_html(message)
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_is_xhr() {
        let req = TestRequest::default()
            .insert_header(("X-Requested-With", "XMLHttpRequest"))
            .to_http_request();
        assert!(is_xhr(&req));

        let req = TestRequest::default().to_http_request();
        assert!(!is_xhr(&req));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_error_page_escapes_message() {
        let page = render_error_page("en", "Error", "Something went wrong", "a < b");
        assert!(page.contains("<html lang=\"en\">"));
        assert!(page.contains("<p class=\"error-message\">a &lt; b</p>"));
    }
}
