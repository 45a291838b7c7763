//! Folder handlers — root listing, detail, create, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use drivebox_core::error::AppError;
use drivebox_entity::folder::{Folder, FolderDetail, RootListing};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_root(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<RootListing>>, AppError> {
    let listing = state.folder_service.list_root(auth.id).await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderDetail>>, AppError> {
    let detail = state.folder_service.get_folder_detail(id, auth.id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folder>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(auth.id, &req.name, req.parent_folder_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Folder created successfully", folder)),
    ))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.folder_service.delete_folder(id, auth.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Folder deleted successfully".to_string(),
    })))
}
