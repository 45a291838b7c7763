//! In-memory folder repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use drivebox_core::error::AppError;
use drivebox_core::result::AppResult;
use drivebox_entity::folder::{CreateFolder, Folder};

use crate::repositories::FolderRepository;

/// Folder repository backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryFolderRepository {
    folders: RwLock<HashMap<Uuid, Folder>>,
}

impl MemoryFolderRepository {
    /// Create an empty in-memory folder repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderRepository for MemoryFolderRepository {
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Folder>> {
        Ok(self
            .folders
            .read()
            .await
            .get(&id)
            .filter(|f| f.owner_id == owner_id)
            .cloned())
    }

    async fn find_roots(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        let folders = self.folders.read().await;
        let mut roots: Vec<Folder> = folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id.is_none())
            .cloned()
            .collect();
        roots.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roots)
    }

    async fn find_children(&self, parent_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        let folders = self.folders.read().await;
        let mut children: Vec<Folder> = folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id == Some(parent_id))
            .cloned()
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    async fn sibling_names(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        base_name: &str,
    ) -> AppResult<Vec<String>> {
        let prefix = format!("{base_name} (");
        let folders = self.folders.read().await;
        Ok(folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id == parent_id)
            .filter(|f| f.name == base_name || f.name.starts_with(&prefix))
            .map(|f| f.name.clone())
            .collect())
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        // The uniqueness check and the insert happen under one write lock,
        // mirroring the unique index in the PostgreSQL schema.
        let mut folders = self.folders.write().await;
        let taken = folders.values().any(|f| {
            f.owner_id == data.owner_id && f.parent_id == data.parent_id && f.name == data.name
        });
        if taken {
            return Err(AppError::conflict(format!(
                "Folder '{}' already exists here",
                data.name
            )));
        }

        let now = Utc::now();
        let folder = Folder {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            owner_id: data.owner_id,
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let mut folders = self.folders.write().await;
        match folders.get(&id) {
            Some(f) if f.owner_id == owner_id => {
                folders.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivebox_core::error::ErrorKind;

    fn create(name: &str, owner_id: Uuid, parent_id: Option<Uuid>) -> CreateFolder {
        CreateFolder {
            name: name.to_string(),
            owner_id,
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_sibling_names_scoped_to_owner_and_parent() {
        let repo = MemoryFolderRepository::new();
        let owner = Uuid::now_v7();
        let other = Uuid::now_v7();

        repo.create(&create("Docs", owner, None)).await.unwrap();
        repo.create(&create("Docs (1)", owner, None)).await.unwrap();
        repo.create(&create("Documents", owner, None)).await.unwrap();
        repo.create(&create("Docs", other, None)).await.unwrap();

        let mut names = repo.sibling_names(owner, None, "Docs").await.unwrap();
        names.sort();
        assert_eq!(names, vec!["Docs", "Docs (1)"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_in_scope_conflicts() {
        let repo = MemoryFolderRepository::new();
        let owner = Uuid::now_v7();

        repo.create(&create("Docs", owner, None)).await.unwrap();
        let err = repo.create(&create("Docs", owner, None)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        // Same name under a different parent is fine.
        let parent = repo.create(&create("Other", owner, None)).await.unwrap();
        repo.create(&create("Docs", owner, Some(parent.id)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_is_owner_scoped() {
        let repo = MemoryFolderRepository::new();
        let owner = Uuid::now_v7();
        let folder = repo.create(&create("Docs", owner, None)).await.unwrap();

        assert!(!repo.delete(folder.id, Uuid::now_v7()).await.unwrap());
        assert!(repo.delete(folder.id, owner).await.unwrap());
        assert!(!repo.delete(folder.id, owner).await.unwrap());
    }
}
