//! Error handlers turning captured errors into client responses

pub mod error;
pub mod page_error;

pub use error::{
    handle_error, translate_error, ApiError, ErrorClass, ErrorContext, ErrorResponder, NoSession,
    SessionTenant, TranslatedError, ERROR_MESSAGE_HEADER,
};
pub use page_error::{handle_page_error, is_xhr};
