//! Diagnostic store console
//!
//! Unauthenticated raw dump of the books table for local inspection, going
//! straight to the repository instead of through the service layer. This is
//! a narrow, deliberate carve-out from the authentication rule; in a
//! networked deployment it must be disabled or access-restricted. Do not
//! extend it to other paths.

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Book, AppState};

/// Dump the raw rows of the books store.
pub async fn dump_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    tracing::debug!("Console dump of books store requested");
    let rows = state.repository.find_all().await?;
    Ok(Json(rows))
}
