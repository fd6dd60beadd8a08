//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod console;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::get,
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::Account, AppState};

/// Extractor for the identity carried by the HTTP Basic header.
///
/// Resolving credentials happens before any handler logic; role checks are
/// performed inside the handlers via `Account::require_*`.
pub struct AuthenticatedAccount(pub Account);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let encoded = auth_header.strip_prefix("Basic ").ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let decoded = BASE64
            .decode(encoded.trim())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| {
                AppError::Authentication("Invalid basic credentials encoding".to_string())
            })?;

        let (username, password) = decoded.split_once(':').ok_or_else(|| {
            AppError::Authentication("Invalid basic credentials format".to_string())
        })?;

        let account = state.services.accounts.verify(username, password)?;
        Ok(AuthenticatedAccount(account))
    }
}

/// Build the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Books
        .route(
            "/books",
            get(books::list_books).post(books::create_book),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Health
        .route("/health", get(health::health_check))
        // Diagnostic console: unauthenticated by design, local inspection only
        .route("/console/books", get(console::dump_books))
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
