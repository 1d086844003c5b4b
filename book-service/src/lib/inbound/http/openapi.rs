use utoipa::openapi::security::HttpAuthScheme;
use utoipa::openapi::security::HttpBuilder;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use super::handlers;

/// Served as JSON at `/api-docs/openapi.json` and browsable at `/swagger-ui`.
///
/// Documented bodies are the `data` payload of the `{status_code, data}`
/// envelope every endpoint responds with.
#[derive(OpenApi)]
#[openapi(
    info(title = "Book Service API"),
    paths(
        handlers::health::health,
        handlers::account::register::register,
        handlers::account::login::login,
        handlers::profile::get_profile::get_profile,
        handlers::profile::update_profile::update_profile,
        handlers::profile::delete_profile::delete_profile,
        handlers::books::create_book::create_book,
        handlers::books::get_book::get_book,
        handlers::books::update_book::update_book,
        handlers::books::delete_book::delete_book,
    ),
    components(
        schemas(
            handlers::health::HealthResponseData,
            handlers::account::register::RegisterRequest,
            handlers::account::login::LoginRequest,
            handlers::account::login::LoginResponseData,
            handlers::profile::update_profile::UpdateProfileRequest,
            handlers::profile::update_profile::UpdatedUserResponseData,
            handlers::books::BookRequest,
            handlers::books::BookResponseData,
            handlers::UserResponseData,
            handlers::MessageResponseData,
            handlers::ApiErrorData,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "books")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme the protected paths refer to.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
