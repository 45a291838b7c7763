//! Folder hierarchy operations and aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_database::repositories::{FileRepository, FolderRepository};
use drivebox_entity::folder::{CreateFolder, Folder, FolderDetail, FolderSummary, RootListing};

use super::naming::resolve_name;

/// Number of recent files returned with the root listing.
const RECENT_FILE_LIMIT: u32 = 5;

/// How many times a create retries after losing a naming race.
const CREATE_RETRY_LIMIT: u32 = 4;

/// Manages the per-owner folder hierarchy.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folders: Arc<dyn FolderRepository>,
    /// File repository, for per-folder aggregates.
    files: Arc<dyn FileRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderRepository>, files: Arc<dyn FileRepository>) -> Self {
        Self { folders, files }
    }

    /// Lists an owner's root folders with direct-file aggregates, plus
    /// their most recently created files.
    pub async fn list_root(&self, owner_id: Uuid) -> Result<RootListing, AppError> {
        let roots = self.folders.find_roots(owner_id).await?;
        let all_files = self.files.find_by_owner(owner_id).await?;

        let folders = roots
            .into_iter()
            .map(|folder| {
                let (count, size) = all_files
                    .iter()
                    .filter(|f| f.folder_id == Some(folder.id))
                    .fold((0u64, 0u64), |(count, size), f| {
                        (count + 1, size + f.size_bytes.max(0) as u64)
                    });
                FolderSummary::from_parts(folder, count, size)
            })
            .collect();

        let recent_files = self.files.find_recent(owner_id, RECENT_FILE_LIMIT).await?;

        Ok(RootListing {
            folders,
            recent_files,
        })
    }

    /// Gets a folder by ID, scoped to an owner.
    pub async fn get_folder(&self, id: Uuid, owner_id: Uuid) -> Result<Folder, AppError> {
        self.folders
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Creates a folder, resolving duplicate names within the sibling scope.
    ///
    /// Two concurrent creates with the same desired name can both resolve
    /// to the same final name; the loser hits the uniqueness constraint
    /// and retries with a fresh resolution.
    pub async fn create_folder(
        &self,
        owner_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Folder, AppError> {
        let desired = name.trim();
        if desired.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        // Parent must exist for this owner before anything is created.
        if let Some(parent) = parent_id {
            self.get_folder(parent, owner_id).await?;
        }

        let mut last_conflict = None;
        for attempt in 0..=CREATE_RETRY_LIMIT {
            let siblings = self
                .folders
                .sibling_names(owner_id, parent_id, desired)
                .await?;
            let resolved = resolve_name(desired, &siblings);

            match self
                .folders
                .create(&CreateFolder {
                    name: resolved.clone(),
                    owner_id,
                    parent_id,
                })
                .await
            {
                Ok(folder) => {
                    info!(
                        owner_id = %owner_id,
                        folder_id = %folder.id,
                        name = %folder.name,
                        "Folder created"
                    );
                    return Ok(folder);
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    warn!(
                        owner_id = %owner_id,
                        name = %resolved,
                        attempt,
                        "Folder name taken concurrently, retrying"
                    );
                    last_conflict = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_conflict
            .unwrap_or_else(|| AppError::conflict(format!("Folder '{desired}' already exists here"))))
    }

    /// Full detail view: direct files, direct subfolders, breadcrumb, and
    /// direct-file aggregates.
    pub async fn get_folder_detail(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<FolderDetail, AppError> {
        let folder = self.get_folder(id, owner_id).await?;

        let files = self.files.find_by_folder(id, owner_id).await?;
        let sub_folders = self.folders.find_children(id, owner_id).await?;
        let breadcrumb = self.build_breadcrumb(&folder, owner_id).await?;

        let (file_count, total_file_size) = files
            .iter()
            .fold((0u64, 0u64), |(count, size), f| {
                (count + 1, size + f.size_bytes.max(0) as u64)
            });

        Ok(FolderDetail {
            id: folder.id,
            name: folder.name,
            owner_id: folder.owner_id,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            files,
            sub_folders,
            breadcrumb,
            file_count,
            total_file_size,
        })
    }

    /// Deletes a folder. Children and contained files are left in place.
    pub async fn delete_folder(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let removed = self.folders.delete(id, owner_id).await?;
        if !removed {
            return Err(AppError::not_found("Folder not found"));
        }

        info!(owner_id = %owner_id, folder_id = %id, "Folder deleted");
        Ok(())
    }

    /// Walks the parent chain upward and returns the ancestors root-first,
    /// excluding the folder itself.
    ///
    /// The walk is iterative and keeps a seen-set so a corrupted parent
    /// chain cannot loop forever; on a cycle the chain collected so far is
    /// returned.
    async fn build_breadcrumb(
        &self,
        folder: &Folder,
        owner_id: Uuid,
    ) -> Result<Vec<Folder>, AppError> {
        let mut chain = Vec::new();
        let mut seen: HashSet<Uuid> = HashSet::from([folder.id]);
        let mut cursor = folder.parent_id;

        while let Some(parent_id) = cursor {
            if !seen.insert(parent_id) {
                warn!(
                    owner_id = %owner_id,
                    folder_id = %folder.id,
                    cycle_at = %parent_id,
                    "Cycle detected in folder parent chain"
                );
                break;
            }

            // A dangling parent reference ends the chain silently.
            let Some(parent) = self.folders.find_by_id(parent_id, owner_id).await? else {
                break;
            };
            cursor = parent.parent_id;
            chain.push(parent);
        }

        chain.reverse();
        Ok(chain)
    }
}
