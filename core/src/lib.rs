//! # JobBoard Core
//!
//! Domain layer for the JobBoard backend.
//! This crate contains the resource keys that identify every translatable
//! error and label, the error item model, and the domain exception types
//! raised when business rules are violated.

pub mod domain;
pub mod errors;
pub mod resources;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use resources::*;
