//! Auth handlers — register, login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use drivebox_core::error::AppError;
use drivebox_service::auth::AuthOutcome;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse};
use crate::state::AppState;

fn to_auth_response(outcome: AuthOutcome) -> AuthResponse {
    AuthResponse {
        token: outcome.token,
        expires_at: outcome.expires_at,
        user: outcome.user.into(),
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.register(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "User registered successfully",
            to_auth_response(outcome),
        )),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::with_message(
        "Logged in successfully",
        to_auth_response(outcome),
    )))
}
