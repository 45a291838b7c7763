//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file stored in DriveBox. The record is created only after the
/// underlying blob has been durably stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// Original file name (including extension).
    pub name: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Publicly resolvable URL for the blob.
    pub public_url: String,
    /// Opaque blob-store key used for retrieval and deletion.
    pub storage_key: String,
    /// The file owner.
    pub owner_id: Uuid,
    /// The containing folder (None means unfiled/root).
    pub folder_id: Option<Uuid>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Public URL returned by the blob store.
    pub public_url: String,
    /// Blob-store key.
    pub storage_key: String,
    /// The file owner.
    pub owner_id: Uuid,
    /// Containing folder (None for unfiled).
    pub folder_id: Option<Uuid>,
}
