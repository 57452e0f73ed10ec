use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "healthy".to_string(),
        service: "TrendConnect".to_string(),
    })
}
