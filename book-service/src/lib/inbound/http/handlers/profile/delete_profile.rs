use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Soft deletes the caller's account. Tokens already issued stay valid until
/// they expire, but every lookup of the deleted user now misses.
#[utoipa::path(
    delete,
    path = "/v1/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account soft deleted", body = MessageResponseData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "Account no longer exists", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .user_service
        .delete_user(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("user successfully deleted"),
            )
        })
}
