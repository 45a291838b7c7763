//! PostgreSQL folder repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_entity::folder::{CreateFolder, Folder};

use super::FolderRepository;

/// Folder repository backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgFolderRepository {
    pool: PgPool,
}

impl PgFolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_roots(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND parent_id IS NULL ORDER BY name ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list root folders", e))
    }

    async fn find_children(&self, parent_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = $1 AND owner_id = $2 ORDER BY name ASC",
        )
        .bind(parent_id)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn sibling_names(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        base_name: &str,
    ) -> AppResult<Vec<String>> {
        // LIKE treats \, % and _ specially; escape them so a base name
        // containing any of them still matches its existing siblings.
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM folders \
             WHERE owner_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             AND (name = $3 OR name LIKE $4)",
        )
        .bind(owner_id)
        .bind(parent_id)
        .bind(base_name)
        .bind(format!("{} (%", escape_like(base_name)))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sibling names", e))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, name, owner_id, parent_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(data.owner_id)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_owner_parent_name_key") =>
            {
                AppError::conflict(format!("Folder '{}' already exists here", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape the LIKE wildcards (`%`, `_`) and the default escape character
/// (`\`) so a value matches itself literally inside a pattern.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
