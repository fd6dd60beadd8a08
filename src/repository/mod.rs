//! Repository layer for book storage
//!
//! The store is a collaborator behind the [`BooksRepository`] trait so any
//! backend (relational, embedded, in-memory map) can substitute without
//! touching the service layer. The Postgres implementation is the production
//! backend; the in-memory one backs the tests.

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

pub use books::PgBooksRepository;
pub use memory::MemoryBooksRepository;

/// Key-indexed persistent collection of books.
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// Persist a book. With `id = None` the store assigns a fresh id;
    /// with `id = Some(_)` the addressed row is fully replaced.
    async fn save(&self, book: &Book) -> AppResult<Book>;

    /// Fetch a book by id, `None` when absent.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Check whether a book with the given id exists.
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// All books, in store-defined order.
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Remove a book by id. The caller is responsible for the existence
    /// check; deleting an absent id is a no-op here.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
