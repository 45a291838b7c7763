//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_core::traits::{BlobStore, StoredObject};

/// Blob store rooted at a local directory. Objects are served from a
/// configured public base URL by whatever fronts the directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored objects.
    root: PathBuf,
    /// Base URL under which objects are publicly reachable.
    public_base_url: String,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given path.
    pub async fn new(root_path: &str, public_base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a key to a path under the root. Keys must consist of plain
    /// path segments; `.`/`..` components and backslashes are rejected so
    /// no key can address anything outside the root.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key.trim_start_matches('/'));
        let plain = relative
            .components()
            .all(|c| matches!(c, std::path::Component::Normal(_)));
        if !plain || key.contains('\\') {
            return Err(AppError::validation(format!("Invalid object key: {key}")));
        }
        Ok(self.root.join(relative))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn put(&self, key: &str, _content_type: &str, data: Bytes) -> AppResult<StoredObject> {
        let full_path = self.resolve(key)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write object: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Stored object");
        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    async fn read_bytes(&self, key: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(key)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {key}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read object: {key}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete object: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.resolve(key)?.exists())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }

    async fn sign_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String> {
        // The local backend has no private bucket; the signed URL is the
        // public URL with an advisory expiry timestamp.
        let expires_at = chrono::Utc::now().timestamp() + expires_in_seconds as i64;
        Ok(format!("{}?expires={expires_at}", self.public_url(key)))
    }
}
