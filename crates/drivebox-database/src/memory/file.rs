//! In-memory file repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_entity::file::{CreateFile, File};

use crate::repositories::FileRepository;

/// File repository backed by a process-local vector.
///
/// Insertion order is preserved, which gives the stable secondary sort
/// key for creation-time ties in `find_recent`.
#[derive(Debug, Default)]
pub struct MemoryFileRepository {
    files: RwLock<Vec<File>>,
}

impl MemoryFileRepository {
    /// Create an empty in-memory file repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<File>> {
        Ok(self
            .files
            .read()
            .await
            .iter()
            .find(|f| f.id == id && f.owner_id == owner_id)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<File>> {
        let files = self.files.read().await;
        Ok(files
            .iter()
            .rev()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_folder(&self, folder_id: Uuid, owner_id: Uuid) -> AppResult<Vec<File>> {
        let files = self.files.read().await;
        let mut matching: Vec<File> = files
            .iter()
            .filter(|f| f.owner_id == owner_id && f.folder_id == Some(folder_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn find_recent(&self, owner_id: Uuid, limit: u32) -> AppResult<Vec<File>> {
        let files = self.files.read().await;
        // Newest first; reverse insertion order breaks created_at ties.
        let mut owned: Vec<&File> = files.iter().filter(|f| f.owner_id == owner_id).collect();
        owned.reverse();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned
            .into_iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        if data.size_bytes < 0 {
            return Err(AppError::new(
                ErrorKind::Validation,
                "File size cannot be negative",
            ));
        }

        let now = Utc::now();
        let file = File {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            mime_type: data.mime_type.clone(),
            size_bytes: data.size_bytes,
            public_url: data.public_url.clone(),
            storage_key: data.storage_key.clone(),
            owner_id: data.owner_id,
            folder_id: data.folder_id,
            created_at: now,
            updated_at: now,
        };
        self.files.write().await.push(file.clone());
        Ok(file)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let mut files = self.files.write().await;
        let before = files.len();
        files.retain(|f| !(f.id == id && f.owner_id == owner_id));
        Ok(files.len() < before)
    }
}
