use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldErrors;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for replacing the profile (raw JSON)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    username: Option<String>,
    email: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let mut errors = FieldErrors::new();

        let username = errors.parse("username", self.username, Username::new);
        let email = errors.parse("email", self.email, EmailAddress::new);

        match (username, email) {
            (Some(username), Some(email)) => Ok(UpdateUserCommand::new(username, email)),
            _ => Err(errors.into_api_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UpdatedUserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UpdatedUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            updated_at: user.updated_at,
        }
    }
}

#[utoipa::path(
    put,
    path = "/v1/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile replaced", body = UpdatedUserResponseData),
        (status = 401, description = "Missing or invalid token", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 404, description = "Account no longer exists", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 409, description = "Username or email taken", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 422, description = "Invalid fields", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<ApiSuccess<UpdatedUserResponseData>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command()?;

    state
        .user_service
        .update_user(&auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
