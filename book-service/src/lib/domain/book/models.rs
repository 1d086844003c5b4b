use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::book::errors::BookIdError;
use crate::domain::book::errors::IsbnError;
use crate::domain::book::errors::PublishedYearError;
use crate::domain::book::errors::TextFieldError;
use crate::domain::user::models::UserId;

/// Book aggregate entity.
///
/// `user_id` is the owner; only the owner may modify or delete the book.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub published_year: PublishedYear,
    pub isbn: Isbn,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}

/// Book unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_TEXT_LENGTH: usize = 255;

fn validated_text(value: String) -> Result<String, TextFieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextFieldError::Empty);
    }

    let length = trimmed.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(TextFieldError::TooLong {
            max: MAX_TEXT_LENGTH,
            actual: length,
        });
    }

    Ok(trimmed.to_string())
}

/// Book title value object. Trimmed, non-blank, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: String) -> Result<Self, TextFieldError> {
        validated_text(title).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author name value object. Same rules as [`BookTitle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(author: String) -> Result<Self, TextFieldError> {
        validated_text(author).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Year of first publication, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub fn new(year: i32) -> Result<Self, PublishedYearError> {
        if year <= 0 {
            return Err(PublishedYearError::NotPositive(year));
        }
        Ok(Self(year))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// ISBN-13 value object.
///
/// Hyphens and spaces are accepted on input and stripped; the stored form is
/// the 13 bare digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    const LENGTH: usize = 13;

    /// Parse and validate an ISBN-13.
    ///
    /// # Errors
    /// * `InvalidCharacters` - Anything other than digits, `-` and spaces
    /// * `InvalidLength` - Not exactly 13 digits
    /// * `InvalidPrefix` - Does not start with 978 or 979
    /// * `InvalidChecksum` - Check digit does not match
    pub fn new(isbn: String) -> Result<Self, IsbnError> {
        let digits: String = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IsbnError::InvalidCharacters);
        }

        if digits.len() != Self::LENGTH {
            return Err(IsbnError::InvalidLength(digits.len()));
        }

        if !(digits.starts_with("978") || digits.starts_with("979")) {
            return Err(IsbnError::InvalidPrefix);
        }

        let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
        let weighted_sum: u32 = values[..12]
            .iter()
            .enumerate()
            .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
            .sum();
        let check_digit = (10 - weighted_sum % 10) % 10;

        if check_digit != values[12] {
            return Err(IsbnError::InvalidChecksum);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated editable fields of a book, used both to create one and to
/// replace an existing one.
#[derive(Debug, Clone)]
pub struct BookCommand {
    pub title: BookTitle,
    pub author: AuthorName,
    pub published_year: PublishedYear,
    pub isbn: Isbn,
}
