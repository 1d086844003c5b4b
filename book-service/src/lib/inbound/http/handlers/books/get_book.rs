use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_book_id;
use super::BookResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/api/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = BookResponseData),
        (status = 400, description = "Malformed id", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "No such book", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = parse_book_id(&id)?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
