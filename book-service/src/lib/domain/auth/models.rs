use std::fmt;

use crate::domain::auth::errors::PasswordError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;

/// Cleartext password as received from a client.
///
/// Never persisted; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is the empty string
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Signed access token handed to the client after login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to exchange credentials for an access token.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rejects_empty() {
        assert_eq!(Password::new(String::new()), Err(PasswordError::Empty));
        assert!(Password::new(" ".to_string()).is_ok());
    }

    #[test]
    fn test_commands_redact_secrets_in_debug() {
        let command = LoginCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("hunter2-secret".to_string()).unwrap(),
        );

        let rendered = format!("{:?}", command);
        assert!(rendered.contains("alice@example.com"));
        assert!(!rendered.contains("hunter2-secret"));

        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig".to_string());
        assert!(!format!("{:?}", token).contains("payload"));
    }
}
