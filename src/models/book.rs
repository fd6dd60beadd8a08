//! Book model and validation rules

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A book record.
///
/// The id is assigned by the store on creation and is never taken from a
/// request body: create ignores it, update overwrites it with the path id.
/// All fields use serde defaults so that an incomplete payload reaches the
/// validator (which reports every blank field) instead of being rejected
/// during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Book {
    /// Unique identifier, store-assigned
    #[serde(default)]
    pub id: Option<i64>,
    /// Title of the book
    #[serde(default)]
    #[validate(custom(function = "non_blank", message = "Title is mandatory"))]
    pub title: String,
    /// Author of the book
    #[serde(default)]
    #[validate(custom(function = "non_blank", message = "Author is mandatory"))]
    pub author: String,
    /// Price of the book; defaults to 0 when absent
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
}

/// Rejects empty and whitespace-only strings.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}
