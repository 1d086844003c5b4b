use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("is required")]
    Empty,
}

/// Error type for registration and login
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists(username) => {
                AuthError::UsernameAlreadyExists(username)
            }
            UserError::EmailAlreadyExists(email) => AuthError::EmailAlreadyExists(email),
            UserError::NotFound(_) | UserError::DatabaseError(_) => {
                AuthError::Unknown(err.to_string())
            }
        }
    }
}
