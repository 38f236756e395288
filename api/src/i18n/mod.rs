//! Localized resource lookup

mod catalog;
mod translator;

pub use catalog::{CatalogError, ResourceCatalog, ResourceLookup};
pub use translator::{Labelled, Translator};
