use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::HealthStatus;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::ok()))
}
