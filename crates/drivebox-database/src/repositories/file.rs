//! PostgreSQL file repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_entity::file::{CreateFile, File};

use super::FileRepository;

/// File repository backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn find_by_folder(&self, folder_id: Uuid, owner_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE folder_id = $1 AND owner_id = $2 ORDER BY name ASC",
        )
        .bind(folder_id)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folder files", e))
    }

    async fn find_recent(&self, owner_id: Uuid, limit: u32) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2",
        )
        .bind(owner_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recent files", e))
    }

    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files \
             (id, name, mime_type, size_bytes, public_url, storage_key, owner_id, folder_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.mime_type)
        .bind(data.size_bytes)
        .bind(&data.public_url)
        .bind(&data.storage_key)
        .bind(data.owner_id)
        .bind(data.folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }
}
