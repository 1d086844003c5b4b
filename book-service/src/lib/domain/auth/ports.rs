use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for registration and credential exchange.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Hash the password and persist a new user.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Unknown` - Hashing or storage failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No live user with this email, or wrong password
    /// * `Unknown` - Storage, hash or signing failure
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;
}
