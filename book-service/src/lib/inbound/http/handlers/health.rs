use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiSuccess;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponseData))
)]
pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            message: "Health Check OK",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponseData {
    #[schema(value_type = String)]
    pub message: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}
