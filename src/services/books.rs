//! Book management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::BooksRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BooksRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BooksRepository>) -> Self {
        Self { repository }
    }

    /// All books, in store order.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        tracing::info!("Fetching all books");
        self.repository.find_all().await
    }

    /// Get a book by id.
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        tracing::info!("Fetching book with ID: {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::book_not_found(id))
    }

    /// Add a new book. Any client-supplied id is discarded; the store
    /// assigns one.
    pub async fn add_book(&self, mut book: Book) -> AppResult<Book> {
        tracing::info!("Adding new book: {}", book.title);
        book.id = None;
        self.repository.save(&book).await
    }

    /// Full-replace update. The addressed id always comes from the path,
    /// never from the body.
    pub async fn update_book(&self, id: i64, mut book: Book) -> AppResult<Book> {
        if !self.repository.exists_by_id(id).await? {
            tracing::warn!("Book not found with ID: {}", id);
            return Err(AppError::book_not_found(id));
        }
        book.id = Some(id);
        tracing::info!("Updating book with ID: {}", id);
        self.repository.save(&book).await
    }

    /// Delete a book by id.
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        if !self.repository.exists_by_id(id).await? {
            tracing::warn!("Book not found with ID: {}", id);
            return Err(AppError::book_not_found(id));
        }
        self.repository.delete_by_id(id).await?;
        tracing::info!("Book with ID {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryBooksRepository;

    fn service() -> BooksService {
        BooksService::new(Arc::new(MemoryBooksRepository::new()))
    }

    fn book(title: &str, author: &str, price: f64) -> Book {
        Book {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            price,
        }
    }

    fn assert_not_found(result: AppResult<impl std::fmt::Debug>, id: i64) {
        match result {
            Err(AppError::NotFound(msg)) => {
                assert_eq!(msg, format!("Book not found with ID: {}", id));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let service = service();
        let created = service.add_book(book("T", "A", 9.99)).await.unwrap();
        let id = created.id.expect("assigned id");

        let fetched = service.get_book(id).await.unwrap();
        assert_eq!(fetched.title, "T");
        assert_eq!(fetched.author, "A");
        assert_eq!(fetched.price, 9.99);
        assert_eq!(fetched.id, Some(id));
    }

    #[tokio::test]
    async fn add_discards_client_supplied_id() {
        let service = service();
        let mut payload = book("T", "A", 1.0);
        payload.id = Some(777);
        let created = service.add_book(payload).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn get_update_delete_fail_on_absent_id() {
        let service = service();
        assert_not_found(service.get_book(5).await, 5);
        assert_not_found(service.update_book(5, book("T", "A", 1.0)).await, 5);
        assert_not_found(service.delete_book(5).await, 5);
    }

    #[tokio::test]
    async fn update_overwrites_body_id_with_path_id() {
        let service = service();
        let created = service.add_book(book("old", "old", 1.0)).await.unwrap();
        let id = created.id.unwrap();

        let mut replacement = book("new", "new", 2.0);
        replacement.id = Some(999);
        let updated = service.update_book(id, replacement).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "new");
        assert!(service.get_book(999).await.is_err());
    }

    #[tokio::test]
    async fn update_is_full_replace() {
        let service = service();
        let created = service
            .add_book(book("Title", "Author", 12.5))
            .await
            .unwrap();
        let id = created.id.unwrap();

        // price omitted from the payload arrives as the default 0
        let updated = service
            .update_book(id, book("Title 2", "Author 2", 0.0))
            .await
            .unwrap();
        assert_eq!(updated.price, 0.0);
    }

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let service = service();
        let created = service.add_book(book("T", "A", 1.0)).await.unwrap();
        let id = created.id.unwrap();

        service.delete_book(id).await.unwrap();
        assert_not_found(service.delete_book(id).await, id);
    }

    #[tokio::test]
    async fn list_returns_all_books() {
        let service = service();
        service.add_book(book("one", "a", 1.0)).await.unwrap();
        service.add_book(book("two", "b", 2.0)).await.unwrap();
        let all = service.list_books().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
