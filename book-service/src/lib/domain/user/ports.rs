use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for profile operations on the authenticated user.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or was deleted
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Replace username and email of an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or was deleted
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Soft delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or was already deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// User directory storage. Soft-deleted rows are invisible to every method.
///
/// `create` and `update` report a taken username or email as the matching
/// conflict variant; `update` and `delete` report a missing live row as
/// `NotFound`. Any other failure is `DatabaseError`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Lookup used by login.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Sets `deleted_at`; the username and email become free for reuse.
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
