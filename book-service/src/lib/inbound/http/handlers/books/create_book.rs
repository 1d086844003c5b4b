use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::BookRequest;
use super::BookResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    post,
    path = "/v1/api/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponseData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "Account no longer exists", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 422, description = "Invalid fields", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .book_service
        .create_book(command, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}
