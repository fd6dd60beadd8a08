//! Bookstore Server
//!
//! A Rust REST API server for managing book records: CRUD over a single
//! Book entity, HTTP Basic authentication with USER/ADMIN role gating,
//! field validation, and a repository-backed persistence layer.

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
    /// Raw store handle, used only by the diagnostic console
    pub repository: Arc<dyn repository::BooksRepository>,
}
