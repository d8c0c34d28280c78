use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ApiResponse, HealthDto, STATUS_ERROR},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - Database answered a ping
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthDto>),
        (status = 503, description = "Database unreachable", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                HealthDto { database: true },
                "Service healthy",
            )),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthDto { database: false },
                    message: "Database unreachable".to_string(),
                    status: STATUS_ERROR.to_string(),
                }),
            )
        }
    }
}
