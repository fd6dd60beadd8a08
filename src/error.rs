//! Error types for the bookstore server

use std::collections::BTreeMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Not-found failure for a book id, with the canonical message used in
    /// 404 response bodies.
    pub fn book_not_found(id: i64) -> Self {
        AppError::NotFound(format!("Book not found with ID: {}", id))
    }
}

/// Collects every field violation into a field -> message map; the first
/// declared constraint message wins when a field has several.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, violations) in errors.field_errors() {
            if let Some(violation) = violations.first() {
                let message = violation
                    .message
                    .clone()
                    .map(|m| m.into_owned())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                fields.insert(field.to_string(), message);
            }
        }
        AppError::Validation(fields)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Authentication(msg) => {
                tracing::debug!("Authentication rejected: {}", msg);
                // Basic challenge, empty body
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic realm=\"bookstore\"")],
                )
                    .into_response()
            }
            AppError::Authorization(msg) => {
                tracing::debug!("Authorization rejected: {}", msg);
                StatusCode::FORBIDDEN.into_response()
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
