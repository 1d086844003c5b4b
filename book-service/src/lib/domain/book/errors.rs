use thiserror::Error;

/// Error type for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for free-text fields such as title and author
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextFieldError {
    #[error("is required")]
    Empty,

    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for PublishedYear validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishedYearError {
    #[error("must be greater than 0, got {0}")]
    NotPositive(i32),
}

/// Error type for ISBN-13 validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IsbnError {
    #[error("must contain exactly 13 digits, got {0}")]
    InvalidLength(usize),

    #[error("may only contain digits, hyphens and spaces")]
    InvalidCharacters,

    #[error("must start with 978 or 979")]
    InvalidPrefix,

    #[error("has an invalid check digit")]
    InvalidChecksum,
}

/// Top-level error type for book operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The requesting account no longer exists in the user directory.
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User {user_id} does not own book {book_id}")]
    NotOwner { user_id: String, book_id: String },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
