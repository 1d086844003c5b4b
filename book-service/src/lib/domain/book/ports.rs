use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookCommand;
use crate::domain::user::models::UserId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a book owned by `owner`.
    ///
    /// # Errors
    /// * `UserNotFound` - `owner` is not a live user
    /// * `DatabaseError` - Database operation failed
    async fn create_book(
        &self,
        command: BookCommand,
        owner: UserId,
    ) -> Result<Book, BookError>;

    /// Retrieve a book by identifier. Any authenticated user may read any book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Replace the editable fields of a book.
    ///
    /// # Errors
    /// * `UserNotFound` - `requester` is not a live user
    /// * `NotFound` - Book does not exist
    /// * `NotOwner` - `requester` is not the owner
    /// * `DatabaseError` - Database operation failed
    async fn update_book(
        &self,
        id: &BookId,
        command: BookCommand,
        requester: UserId,
    ) -> Result<Book, BookError>;

    /// Delete a book.
    ///
    /// # Errors
    /// * `UserNotFound` - `requester` is not a live user
    /// * `NotFound` - Book does not exist
    /// * `NotOwner` - `requester` is not the owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId, requester: UserId) -> Result<(), BookError>;
}

/// Persistence operations for book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// # Returns
    /// Optional book entity (None if not found)
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
