use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// `user_id` carries the authenticated user's identifier. `iat` and `exp`
/// are Unix timestamps in seconds; every issued token carries both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the user the token was issued to
    pub user_id: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid from now for `ttl`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `ttl` - Token lifetime
    pub fn for_user(user_id: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", Duration::hours(24));

        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_serializes_user_id_claim() {
        let claims = Claims {
            user_id: "abc".to_string(),
            iat: 1,
            exp: 2,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "user_id": "abc", "iat": 1, "exp": 2 }));
    }
}
