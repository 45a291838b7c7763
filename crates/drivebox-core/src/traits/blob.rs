//! Blob-store trait for pluggable binary object storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Reference to a durably stored object, returned by [`BlobStore::put`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoredObject {
    /// The opaque key the object was stored under.
    pub key: String,
    /// Publicly resolvable URL for the object.
    pub url: String,
}

/// Trait for binary object storage backends.
///
/// Implementations exist for the local filesystem, an in-memory store,
/// and S3. The trait is defined here in `drivebox-core` and implemented
/// in `drivebox-storage`; services receive it as `Arc<dyn BlobStore>` so
/// the backend is substitutable in tests.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store bytes under the given key. The write must be durable before
    /// this returns; callers rely on that to order blob writes ahead of
    /// metadata writes.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> AppResult<StoredObject>;

    /// Read an object back into memory as a complete byte vector.
    async fn read_bytes(&self, key: &str) -> AppResult<Bytes>;

    /// Delete the object at the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether an object exists at the given key.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Resolve the permanent public URL for a key.
    fn public_url(&self, key: &str) -> String;

    /// Produce a time-limited URL granting read access to a key.
    async fn sign_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String>;
}
