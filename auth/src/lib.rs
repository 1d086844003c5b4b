//! Credential and token primitives for the book service.
//!
//! Passwords are stored as Argon2id PHC strings with fixed cost parameters.
//! Access tokens are HS256 JWTs whose only subject claim is `user_id`.
//! Nothing in this crate touches storage or HTTP.
//!
//! ```
//! use auth::Authenticator;
//! use auth::JwtError;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"0123456789abcdef0123456789abcdef", Duration::hours(24), 30);
//!
//! let stored = auth.hash_password("correct horse").unwrap();
//! assert!(!auth.verify_password("battery staple", &stored).unwrap());
//!
//! let login = auth.authenticate("correct horse", &stored, 42).unwrap();
//! assert_eq!(auth.verify_token(&login.access_token).unwrap().user_id, "42");
//! assert!(matches!(
//!     auth.verify_token("not.a.token"),
//!     Err(JwtError::MalformedToken(_))
//! ));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
