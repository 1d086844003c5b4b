use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub mod book;
pub mod user;

pub use book::PostgresBookRepository;
pub use user::PostgresUserRepository;

/// Failure of a single bounded query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query timed out after {0:?}")]
    TimedOut(Duration),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl QueryError {
    /// Name of the violated unique constraint, if that is what failed.
    pub fn unique_violation(&self) -> Option<&str> {
        match self {
            QueryError::Database(e) => e
                .as_database_error()
                .filter(|db_err| db_err.is_unique_violation())
                .and_then(|db_err| db_err.constraint()),
            QueryError::TimedOut(_) => None,
        }
    }
}

/// Run `query` under `limit`. An expired deadline cancels the query.
pub(crate) async fn bounded<T>(
    limit: Duration,
    query: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, QueryError> {
    match tokio::time::timeout(limit, query).await {
        Ok(result) => result.map_err(QueryError::from),
        Err(_) => Err(QueryError::TimedOut(limit)),
    }
}
