//! Business logic services

pub mod accounts;
pub mod books;

use std::sync::Arc;

use crate::{config::AccountsConfig, error::AppResult, repository::BooksRepository};

pub use accounts::AccountDirectory;
pub use books::BooksService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: BooksService,
    pub accounts: Arc<AccountDirectory>,
}

impl Services {
    /// Create all services over the given repository and the provisioned
    /// account credentials.
    pub fn new(
        repository: Arc<dyn BooksRepository>,
        accounts_config: &AccountsConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            books: BooksService::new(repository),
            accounts: Arc::new(AccountDirectory::from_config(accounts_config)?),
        })
    }
}
