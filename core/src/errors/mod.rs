//! Domain-specific error types and error handling.

mod domain_exception;
mod entity_validation;

// Re-export all error types
pub use domain_exception::{BoxError, DomainException, ExceptionKind};
pub use entity_validation::{EntityValidationError, EntityValidationResult, PropertyValidationError};

pub type DomainResult<T> = Result<T, DomainException>;

#[cfg(test)]
mod tests;
