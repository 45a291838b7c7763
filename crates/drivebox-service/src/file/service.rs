//! File upload, listing, and deletion.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use drivebox_core::config::StorageConfig;
use drivebox_core::error::AppError;
use drivebox_core::traits::BlobStore;
use drivebox_database::repositories::{FileRepository, FolderRepository, UserRepository};
use drivebox_entity::file::{CreateFile, File};
use drivebox_storage::key::generate_object_key;

/// Object-key subfolder for files uploaded outside any folder.
const ROOT_UPLOAD_SUBFOLDER: &str = "drive";

/// An upload parsed out of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original file name as sent by the client.
    pub file_name: String,
    /// MIME type as sent by the client.
    pub content_type: String,
    /// File contents.
    pub data: Bytes,
    /// Target folder (None for the root drive).
    pub folder_id: Option<Uuid>,
}

/// Manages file ingestion and lifecycle.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File metadata repository.
    files: Arc<dyn FileRepository>,
    /// Folder repository, for upload-target validation.
    folders: Arc<dyn FolderRepository>,
    /// User repository, for the storage-used counter.
    users: Arc<dyn UserRepository>,
    /// Blob store holding the file contents.
    blobs: Arc<dyn BlobStore>,
    /// Upload size cap in bytes.
    max_upload_size_bytes: u64,
    /// Cap expressed in whole MB, for the rejection message.
    max_upload_size_mb: u64,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        files: Arc<dyn FileRepository>,
        folders: Arc<dyn FolderRepository>,
        users: Arc<dyn UserRepository>,
        blobs: Arc<dyn BlobStore>,
        storage_config: &StorageConfig,
    ) -> Self {
        Self {
            files,
            folders,
            users,
            blobs,
            max_upload_size_bytes: storage_config.max_upload_size_bytes,
            max_upload_size_mb: storage_config.max_upload_size_mb(),
        }
    }

    /// Stores an uploaded file: blob first, metadata second.
    ///
    /// If the blob write fails no metadata record is created. If the
    /// metadata insert fails after the blob write, the orphaned blob is
    /// left behind; nothing references it.
    pub async fn upload(&self, owner_id: Uuid, request: UploadRequest) -> Result<File, AppError> {
        if request.data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::payload_too_large(format!(
                "File size exceeds the limit of {}MB",
                self.max_upload_size_mb
            )));
        }

        let subfolder = match request.folder_id {
            Some(folder_id) => {
                let folder = self
                    .folders
                    .find_by_id(folder_id, owner_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Folder not found"))?;
                format!("{owner_id}/{}", folder.name)
            }
            None => ROOT_UPLOAD_SUBFOLDER.to_string(),
        };

        let key = generate_object_key(&request.file_name, Some(&subfolder));
        let size_bytes = request.data.len() as i64;

        let stored = self
            .blobs
            .put(&key, &request.content_type, request.data)
            .await?;

        let file = self
            .files
            .create(&CreateFile {
                name: request.file_name,
                mime_type: request.content_type,
                size_bytes,
                public_url: stored.url,
                storage_key: stored.key,
                owner_id,
                folder_id: request.folder_id,
            })
            .await?;

        self.users.adjust_storage_used(owner_id, size_bytes).await?;

        info!(
            owner_id = %owner_id,
            file_id = %file.id,
            name = %file.name,
            bytes = size_bytes,
            "File uploaded"
        );

        Ok(file)
    }

    /// Lists all files for an owner.
    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<File>, AppError> {
        self.files.find_by_owner(owner_id).await
    }

    /// Deletes a file's metadata record and decrements the owner's
    /// storage counter. The blob itself is kept.
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let file = self
            .files
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        let removed = self.files.delete(id, owner_id).await?;
        if !removed {
            return Err(AppError::not_found("File not found"));
        }

        self.users
            .adjust_storage_used(owner_id, -file.size_bytes)
            .await?;

        info!(owner_id = %owner_id, file_id = %id, "File deleted");
        Ok(())
    }
}
