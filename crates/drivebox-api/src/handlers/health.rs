//! Health check handler.

use axum::extract::State;
use axum::Json;

use drivebox_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    let storage_healthy = state.blob_store.health_check().await.unwrap_or(false);

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        storage_backend: state.blob_store.provider_type().to_string(),
        storage_healthy,
    })))
}
