use std::collections::BTreeMap;
use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::auth::errors::AuthError;
use crate::domain::book::errors::BookError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod account;
pub mod books;
pub mod health;
pub mod profile;

const INTERNAL_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";
const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
const VALIDATION_FAILED_MESSAGE: &str = "the request contains invalid fields";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error returned by handlers and middleware.
///
/// `InternalServerError` carries a diagnostic that is logged and replaced by
/// a generic message on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    ValidationFailed(BTreeMap<String, String>),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::message(INTERNAL_ERROR_MESSAGE),
                )
            }
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ApiErrorData::message(msg))
            }
            ApiError::ValidationFailed(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorData {
                    message: VALIDATION_FAILED_MESSAGE.to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorData::message(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::message(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ApiErrorData::message(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorData::message(msg)),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiErrorData::message(msg)),
        };

        (status, Json(ApiResponseBody::new(status, data))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON with a field of the wrong type.
            JsonRejection::JsonDataError(e) => ApiError::UnprocessableEntity(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            UserError::UsernameAlreadyExists(_) => {
                ApiError::Conflict("username already exists".to_string())
            }
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict("email already exists".to_string())
            }
            UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameAlreadyExists(_) => {
                ApiError::Conflict("username already exists".to_string())
            }
            AuthError::EmailAlreadyExists(_) => {
                ApiError::Conflict("email already exists".to_string())
            }
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("invalid email or password".to_string())
            }
            AuthError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) | BookError::UserNotFound(_) => {
                ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            BookError::NotOwner { .. } => ApiError::Forbidden(
                "you do not have permission to modify this book".to_string(),
            ),
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiErrorData {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

/// Collects per-field validation failures for a request body.
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an optional raw field, recording "is required" when absent
    /// and the parser's message when invalid.
    pub fn parse<R, T, E>(
        &mut self,
        field: &str,
        raw: Option<R>,
        parser: impl FnOnce(R) -> Result<T, E>,
    ) -> Option<T>
    where
        E: Display,
    {
        let Some(raw) = raw else {
            self.0.insert(field.to_string(), "is required".to_string());
            return None;
        };

        match parser(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.insert(field.to_string(), e.to_string());
                None
            }
        }
    }

    pub fn into_api_error(self) -> ApiError {
        ApiError::ValidationFailed(self.0)
    }
}

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collects_every_failure() {
        let mut errors = FieldErrors::new();

        let missing: Option<String> = errors.parse("title", None::<String>, |s| Ok::<_, String>(s));
        let invalid: Option<i32> = errors.parse("published_year", Some(0), |y: i32| {
            if y > 0 {
                Ok(y)
            } else {
                Err("must be greater than 0")
            }
        });
        let valid = errors.parse("author", Some("Tolkien".to_string()), |s| Ok::<_, String>(s));

        assert!(missing.is_none());
        assert!(invalid.is_none());
        assert_eq!(valid.as_deref(), Some("Tolkien"));

        let ApiError::ValidationFailed(map) = errors.into_api_error() else {
            panic!("expected validation failure");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["title"], "is required");
        assert_eq!(map["published_year"], "must be greater than 0");
    }

    #[test]
    fn test_domain_errors_map_to_distinct_statuses() {
        assert_eq!(
            ApiError::from(AuthError::EmailAlreadyExists("a@b.c".to_string())),
            ApiError::Conflict("email already exists".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::UsernameAlreadyExists("alice".to_string())),
            ApiError::Conflict("username already exists".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized("invalid email or password".to_string())
        );
        assert!(matches!(
            ApiError::from(BookError::NotOwner {
                user_id: "u".to_string(),
                book_id: "b".to_string()
            }),
            ApiError::Forbidden(_)
        ));
        assert_eq!(
            ApiError::from(BookError::UserNotFound("u".to_string())),
            ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
        );
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("timeout".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[tokio::test]
    async fn test_internal_error_response_is_opaque() {
        let response =
            ApiError::InternalServerError("password_hash column missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let raw = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!raw.contains("password_hash column missing"));

        let body: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(body["status_code"], 500);
        assert_eq!(body["data"]["message"], INTERNAL_ERROR_MESSAGE);
        assert!(body["data"].get("errors").is_none());
    }
}
