use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Signature does not match the configured secret.
    #[error("Token signature is invalid")]
    InvalidToken,

    /// `exp` is in the past by more than the allowed leeway.
    #[error("Token is expired")]
    ExpiredToken,

    /// Bad segments, bad base64, bad JSON or missing claims.
    #[error("Token is malformed: {0}")]
    MalformedToken(String),
}
