//! Account model and role checks

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// The two fixed roles known to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated identity, as resolved by the credential directory.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub role: Role,
}

impl Account {
    /// Read access to books: USER or ADMIN.
    pub fn require_read_books(&self) -> AppResult<()> {
        match self.role {
            Role::User | Role::Admin => Ok(()),
        }
    }

    /// Write access to books: ADMIN only.
    pub fn require_write_books(&self) -> AppResult<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "ADMIN role required, '{}' has role {}",
                self.username, self.role
            )))
        }
    }
}
