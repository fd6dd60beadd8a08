//! Fixed in-memory credential directory
//!
//! Built once at startup from configuration and never mutated afterwards.
//! Passwords are kept only as salted Argon2 hashes; verification re-hashes
//! the supplied password and compares.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AccountsConfig,
    error::{AppError, AppResult},
    models::{Account, Role},
};

struct DirectoryEntry {
    username: String,
    password_hash: String,
    role: Role,
}

pub struct AccountDirectory {
    entries: Vec<DirectoryEntry>,
}

impl AccountDirectory {
    /// Build the directory from the two provisioned identities, hashing
    /// their configured passwords.
    pub fn from_config(config: &AccountsConfig) -> AppResult<Self> {
        let entries = vec![
            DirectoryEntry {
                username: config.user.username.clone(),
                password_hash: hash_password(&config.user.password)?,
                role: Role::User,
            },
            DirectoryEntry {
                username: config.admin.username.clone(),
                password_hash: hash_password(&config.admin.password)?,
                role: Role::Admin,
            },
        ];
        Ok(Self { entries })
    }

    /// Verify a username/password pair against the directory. Returns the
    /// resolved account, or an authentication failure that deliberately does
    /// not distinguish unknown users from wrong passwords.
    pub fn verify(&self, username: &str, password: &str) -> AppResult<Account> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.username == username)
            .ok_or_else(|| {
                AppError::Authentication("Invalid username or password".to_string())
            })?;

        let parsed_hash = PasswordHash::new(&entry.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(Account {
            username: entry.username.clone(),
            role: entry.role,
        })
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccountsConfig;

    fn directory() -> AccountDirectory {
        AccountDirectory::from_config(&AccountsConfig::default()).unwrap()
    }

    #[test]
    fn valid_credentials_resolve_roles() {
        let directory = directory();
        let user = directory.verify("user", "user123").unwrap();
        assert_eq!(user.role, Role::User);
        let admin = directory.verify("admin", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let result = directory().verify("admin", "nope");
        assert!(matches!(result, Err(AppError::Authentication(_))));
    }

    #[test]
    fn unknown_user_is_rejected() {
        let result = directory().verify("nobody", "user123");
        assert!(matches!(result, Err(AppError::Authentication(_))));
    }

    #[test]
    fn passwords_are_stored_hashed() {
        let directory = directory();
        for entry in &directory.entries {
            assert!(entry.password_hash.starts_with("$argon2"));
        }
    }
}
