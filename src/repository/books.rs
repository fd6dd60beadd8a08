//! Postgres-backed books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BooksRepository;

#[derive(Clone)]
pub struct PgBooksRepository {
    pool: Pool<Postgres>,
}

impl PgBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BooksRepository for PgBooksRepository {
    async fn save(&self, book: &Book) -> AppResult<Book> {
        let saved = match book.id {
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (title, author, price)
                    VALUES ($1, $2, $3)
                    RETURNING id, title, author, price
                    "#,
                )
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.price)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Book>(
                r#"
                UPDATE books
                SET title = $2, author = $3, price = $4
                WHERE id = $1
                RETURNING id, title, author, price
                "#,
            )
            .bind(id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.price)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Book {} vanished during update", id))
            })?,
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, price FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, title, author, price FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(books)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
