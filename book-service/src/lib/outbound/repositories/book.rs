use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::bounded;
use super::QueryError;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Isbn;
use crate::domain::book::models::PublishedYear;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::models::UserId;

pub struct PostgresBookRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_book(row: PgRow) -> Result<Book, BookError> {
        let read = |e: sqlx::Error| BookError::DatabaseError(e.to_string());
        let corrupt =
            |field: &str, e: String| BookError::DatabaseError(format!("stored {} invalid: {}", field, e));

        let id: Uuid = row.try_get("id").map_err(read)?;
        let title: String = row.try_get("title").map_err(read)?;
        let author: String = row.try_get("author").map_err(read)?;
        let published_year: i32 = row.try_get("published_year").map_err(read)?;
        let isbn: String = row.try_get("isbn").map_err(read)?;
        let user_id: Uuid = row.try_get("user_id").map_err(read)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

        Ok(Book {
            id: BookId(id),
            title: BookTitle::new(title).map_err(|e| corrupt("title", e.to_string()))?,
            author: AuthorName::new(author).map_err(|e| corrupt("author", e.to_string()))?,
            published_year: PublishedYear::new(published_year)
                .map_err(|e| corrupt("published_year", e.to_string()))?,
            isbn: Isbn::new(isbn).map_err(|e| corrupt("isbn", e.to_string()))?,
            user_id: UserId(user_id),
            created_at,
            updated_at,
        })
    }
}

fn database_error(e: QueryError) -> BookError {
    BookError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        let query = sqlx::query(
            r#"
            INSERT INTO books (id, title, author, published_year, isbn, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.published_year.value())
        .bind(book.isbn.as_str())
        .bind(book.user_id.0)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&self.pool);

        bounded(self.query_timeout, query)
            .await
            .map_err(database_error)?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let query = sqlx::query(
            r#"
            SELECT id, title, author, published_year, isbn, user_id, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool);

        bounded(self.query_timeout, query)
            .await
            .map_err(database_error)?
            .map(Self::row_to_book)
            .transpose()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let query = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, published_year = $4, isbn = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.published_year.value())
        .bind(book.isbn.as_str())
        .bind(book.updated_at)
        .execute(&self.pool);

        let result = bounded(self.query_timeout, query)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id.to_string()));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let query = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool);

        let result = bounded(self.query_timeout, query)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
