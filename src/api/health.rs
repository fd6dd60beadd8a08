//! Health check endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedAccount;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint. Like every non-books path outside the console
/// carve-out, it requires an authenticated identity (any role).
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn health_check(
    AuthenticatedAccount(_account): AuthenticatedAccount,
) -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
