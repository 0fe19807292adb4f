//! Library request service
//!
//! Patrons request books from a fixed catalog; each book is held by at most
//! one open request at a time. Exposes a REST JSON API over a PostgreSQL
//! backed reservation engine.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
