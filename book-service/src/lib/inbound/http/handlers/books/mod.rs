use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookCommand;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Isbn;
use crate::domain::book::models::PublishedYear;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::FieldErrors;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod update_book;

pub use create_book::create_book;
pub use delete_book::delete_book;
pub use get_book::get_book;
pub use update_book::update_book;

/// HTTP request body for creating or replacing a book (raw JSON)
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRequest {
    title: Option<String>,
    author: Option<String>,
    published_year: Option<i32>,
    isbn: Option<String>,
}

impl BookRequest {
    fn try_into_command(self) -> Result<BookCommand, ApiError> {
        let mut errors = FieldErrors::new();

        let title = errors.parse("title", self.title, BookTitle::new);
        let author = errors.parse("author", self.author, AuthorName::new);
        let published_year = errors.parse("published_year", self.published_year, PublishedYear::new);
        let isbn = errors.parse("isbn", self.isbn, Isbn::new);

        match (title, author, published_year, isbn) {
            (Some(title), Some(author), Some(published_year), Some(isbn)) => Ok(BookCommand {
                title,
                author,
                published_year,
                isbn,
            }),
            _ => Err(errors.into_api_error()),
        }
    }
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    BookId::from_string(raw).map_err(|e| ApiError::BadRequest(format!("invalid book id: {}", e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookResponseData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub isbn: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            published_year: book.published_year.value(),
            isbn: book.isbn.as_str().to_string(),
            user_id: book.user_id.to_string(),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_request_reports_field_errors() {
        let request: BookRequest = serde_json::from_value(serde_json::json!({
            "title": " ",
            "author": "Tolkien",
            "published_year": 0,
            "isbn": "9780306406158"
        }))
        .unwrap();

        let Err(ApiError::ValidationFailed(errors)) = request.try_into_command() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["isbn", "published_year", "title"]
        );
    }

    #[test]
    fn test_parse_book_id() {
        assert!(parse_book_id("2b1f2c4e-9d55-4c1e-8f4a-3c5e6d7f8a9b").is_ok());
        assert!(matches!(
            parse_book_id("42"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
