pub mod auth;
pub mod cors;
pub mod error_handler;
pub mod language;

pub use auth::*;
pub use cors::*;
pub use error_handler::*;
pub use language::*;
