//! Data transfer objects for API requests and responses

pub mod error;
pub mod job_field;

pub use error::ErrorMessage;
pub use job_field::JobField;
