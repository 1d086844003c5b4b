use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_book_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    delete,
    path = "/v1/api/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponseData),
        (status = 400, description = "Malformed id", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 403, description = "Caller does not own the book", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "No such book or account", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let book_id = parse_book_id(&id)?;

    state
        .book_service
        .delete_book(&book_id, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("book successfully deleted"),
            )
        })
}
