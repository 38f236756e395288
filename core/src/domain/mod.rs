//! Domain models carried from errors to API responses

pub mod error_item;

pub use error_item::ErrorItem;
