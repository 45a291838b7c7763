//! Folder entity model and the aggregated views built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::file::File;

/// A folder in the per-owner hierarchy.
///
/// `parent_id`, when set, always references a folder with the same
/// `owner_id`; the graph restricted to one owner is a forest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name, unique within its sibling scope after name resolution.
    pub name: String,
    /// The folder owner. Never changes after creation.
    pub owner_id: Uuid,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder. The name here is the final,
/// collision-resolved name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Resolved folder name.
    pub name: String,
    /// The folder owner.
    pub owner_id: Uuid,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
}

/// A folder together with aggregates over its direct files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// The folder owner.
    pub owner_id: Uuid,
    /// Parent folder ID.
    pub parent_id: Option<Uuid>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Number of files directly in this folder.
    pub file_count: u64,
    /// Total size in bytes of files directly in this folder.
    pub total_file_size: u64,
}

impl FolderSummary {
    /// Builds a summary from a folder and its direct-file aggregates.
    pub fn from_parts(folder: Folder, file_count: u64, total_file_size: u64) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            owner_id: folder.owner_id,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            file_count,
            total_file_size,
        }
    }
}

/// The root-level listing for an owner: root folders with aggregates
/// plus the most recently created files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootListing {
    /// Root folders with direct-file aggregates.
    pub folders: Vec<FolderSummary>,
    /// The owner's most recently created files, newest first.
    pub recent_files: Vec<File>,
}

/// Full detail view of a single folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderDetail {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// The folder owner.
    pub owner_id: Uuid,
    /// Parent folder ID.
    pub parent_id: Option<Uuid>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Files directly in this folder.
    pub files: Vec<File>,
    /// Direct child folders.
    pub sub_folders: Vec<Folder>,
    /// Ancestor chain, root first, excluding this folder itself.
    pub breadcrumb: Vec<Folder>,
    /// Number of direct files (not recursive).
    pub file_count: u64,
    /// Total size in bytes of direct files (not recursive).
    pub total_file_size: u64,
}
