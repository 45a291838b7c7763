//! File handlers — multipart upload, listing, deletion.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use drivebox_core::error::AppError;
use drivebox_entity::file::File;
use drivebox_service::file::UploadRequest;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<File>>>, AppError> {
    let files = state.file_service.list(auth.id).await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// POST /api/files
///
/// Multipart form with a `file` part and an optional `parent_folder_id`
/// text part.
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<File>>), AppError> {
    let mut upload: Option<UploadRequest> = None;
    let mut folder_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("File part is missing a filename"))?;
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file part: {e}")))?;

                upload = Some(UploadRequest {
                    file_name,
                    content_type,
                    data,
                    folder_id: None,
                });
            }
            Some("parent_folder_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read field: {e}")))?;
                if !text.trim().is_empty() {
                    let parsed = text
                        .trim()
                        .parse::<Uuid>()
                        .map_err(|_| AppError::validation("Invalid parent_folder_id"))?;
                    folder_id = Some(parsed);
                }
            }
            _ => {}
        }
    }

    let mut request = upload.ok_or_else(|| AppError::validation("Missing file field"))?;
    request.folder_id = folder_id;

    let file = state.file_service.upload(auth.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("File uploaded successfully", file)),
    ))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.file_service.delete(id, auth.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "File deleted successfully".to_string(),
    })))
}
