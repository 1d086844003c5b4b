use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldErrors;
use crate::inbound::http::handlers::UserResponseData;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    post,
    path = "/v1/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponseData),
        (status = 400, description = "Malformed body", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 409, description = "Username or email taken", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 422, description = "Invalid fields", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let mut errors = FieldErrors::new();

        let username = errors.parse("username", self.username, Username::new);
        let email = errors.parse("email", self.email, EmailAddress::new);
        let password = errors.parse("password", self.password, Password::new);

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) => {
                Ok(RegisterUserCommand::new(username, email, password))
            }
            _ => Err(errors.into_api_error()),
        }
    }
}
