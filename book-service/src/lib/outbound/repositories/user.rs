use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::bounded;
use super::QueryError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

const USERNAME_UNIQUE_INDEX: &str = "users_username_key";
const EMAIL_UNIQUE_INDEX: &str = "users_email_key";

/// Postgres-backed user directory.
///
/// Deletion sets `deleted_at`; every read filters on `deleted_at IS NULL`.
/// Uniqueness of username and email only applies among live rows.
pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        let read = |e: sqlx::Error| UserError::DatabaseError(e.to_string());

        let id: Uuid = row.try_get("id").map_err(read)?;
        let username: String = row.try_get("username").map_err(read)?;
        let email: String = row.try_get("email").map_err(read)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

        Ok(User {
            id: UserId(id),
            username: Username::new(username)
                .map_err(|e| UserError::DatabaseError(format!("stored username invalid: {}", e)))?,
            email: EmailAddress::new(email)
                .map_err(|e| UserError::DatabaseError(format!("stored email invalid: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(read)?,
            created_at,
            updated_at,
        })
    }

    fn write_error(e: QueryError, user: &User) -> UserError {
        match e.unique_violation() {
            Some(USERNAME_UNIQUE_INDEX) => {
                UserError::UsernameAlreadyExists(user.username.as_str().to_string())
            }
            Some(EMAIL_UNIQUE_INDEX) => UserError::EmailAlreadyExists(user.email.as_str().to_string()),
            _ => UserError::DatabaseError(e.to_string()),
        }
    }
}

fn read_error(e: QueryError) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let query = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool);

        bounded(self.query_timeout, query)
            .await
            .map_err(|e| Self::write_error(e, &user))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool);

        bounded(self.query_timeout, query)
            .await
            .map_err(read_error)?
            .map(Self::row_to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let query = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool);

        bounded(self.query_timeout, query)
            .await
            .map_err(read_error)?
            .map(Self::row_to_user)
            .transpose()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let query = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, updated_at = $4
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.updated_at)
        .execute(&self.pool);

        let result = bounded(self.query_timeout, query)
            .await
            .map_err(|e| Self::write_error(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let query = sqlx::query(
            r#"
            UPDATE users
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .execute(&self.pool);

        let result = bounded(self.query_timeout, query)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
