//! Store traits and their PostgreSQL implementations.
//!
//! The traits are what the service layer depends on; every query is
//! owner-scoped so isolation is enforced at the lowest data-access layer.

pub mod file;
pub mod folder;
pub mod user;

use async_trait::async_trait;
use uuid::Uuid;

use drivebox_core::result::AppResult;
use drivebox_entity::file::{CreateFile, File};
use drivebox_entity::folder::{CreateFolder, Folder};
use drivebox_entity::user::{CreateUser, User};

pub use file::PgFileRepository;
pub use folder::PgFolderRepository;
pub use user::PgUserRepository;

/// Store contract for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Adjust the storage-used counter by a signed delta.
    async fn adjust_storage_used(&self, id: Uuid, delta_bytes: i64) -> AppResult<()>;
}

/// Store contract for the folder hierarchy.
#[async_trait]
pub trait FolderRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a folder by ID, scoped to an owner.
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Folder>>;

    /// List an owner's root folders (no parent).
    async fn find_roots(&self, owner_id: Uuid) -> AppResult<Vec<Folder>>;

    /// List the direct children of a folder, scoped to an owner.
    async fn find_children(&self, parent_id: Uuid, owner_id: Uuid) -> AppResult<Vec<Folder>>;

    /// Names in the sibling scope that could collide with `base_name`,
    /// i.e. `base_name` itself or `base_name (n)`. Implementations may
    /// over-approximate; the naming resolver re-checks suffixes exactly.
    async fn sibling_names(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        base_name: &str,
    ) -> AppResult<Vec<String>>;

    /// Insert a folder with an already-resolved name. Fails with
    /// `Conflict` when `(owner_id, parent_id, name)` is already taken,
    /// which the caller handles by re-running name resolution.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Delete a folder by ID and owner. Returns `true` if a row was
    /// removed. Children are not cascaded.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool>;
}

/// Store contract for file metadata records.
#[async_trait]
pub trait FileRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a file by ID, scoped to an owner.
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<File>>;

    /// List all files for an owner.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<File>>;

    /// List the files directly inside a folder, scoped to an owner.
    async fn find_by_folder(&self, folder_id: Uuid, owner_id: Uuid) -> AppResult<Vec<File>>;

    /// The owner's most recently created files, newest first. Creation-time
    /// ties are broken by ID descending (IDs are time-ordered UUIDv7).
    async fn find_recent(&self, owner_id: Uuid, limit: u32) -> AppResult<Vec<File>>;

    /// Insert a new file record.
    async fn create(&self, data: &CreateFile) -> AppResult<File>;

    /// Delete a file by ID and owner. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool>;
}
