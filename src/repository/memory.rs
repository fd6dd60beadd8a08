//! In-memory books repository
//!
//! Mirrors the identity-column behavior of the Postgres backend: ids are
//! assigned from a monotonic counter and never reused after deletion within
//! the lifetime of the store.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BooksRepository;

#[derive(Debug, Default)]
pub struct MemoryBooksRepository {
    books: Mutex<BTreeMap<i64, Book>>,
    next_id: AtomicI64,
}

impl MemoryBooksRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<i64, Book>>> {
        self.books
            .lock()
            .map_err(|_| AppError::Internal("books store lock poisoned".to_string()))
    }
}

#[async_trait]
impl BooksRepository for MemoryBooksRepository {
    async fn save(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.lock()?;
        let id = match book.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        let saved = Book {
            id: Some(id),
            ..book.clone()
        };
        books.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.lock()?.contains_key(&id))
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.lock()?.remove(&id);
        Ok(())
    }
}
