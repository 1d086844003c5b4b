use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Password;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldErrors;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    post,
    path = "/v1/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed access token", body = LoginResponseData),
        (status = 401, description = "Invalid credentials", body = crate::inbound::http::handlers::ApiErrorData),
        (status = 422, description = "Invalid fields", body = crate::inbound::http::handlers::ApiErrorData)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    access_token: token.into_inner(),
                },
            )
        })
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let mut errors = FieldErrors::new();

        let email = errors.parse("email", self.email, EmailAddress::new);
        let password = errors.parse("password", self.password, Password::new);

        match (email, password) {
            (Some(email), Some(password)) => Ok(LoginCommand::new(email, password)),
            _ => Err(errors.into_api_error()),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResponseData {
    pub access_token: String,
}

impl std::fmt::Debug for LoginResponseData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponseData")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
