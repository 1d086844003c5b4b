use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::parse_book_id;
use super::BookRequest;
use super::BookResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    put,
    path = "/v1/api/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book id")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book replaced", body = BookResponseData),
        (status = 400, description = "Malformed id", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 403, description = "Caller does not own the book", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "No such book or account", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 422, description = "Invalid fields", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = parse_book_id(&id)?;
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .book_service
        .update_book(&book_id, command, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
