//! # JobBoard API
//!
//! HTTP layer of the JobBoard backend: request locale selection, localized
//! resources and the translation of errors into client responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
