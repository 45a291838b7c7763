//! In-memory blob store, used by tests and the `memory` backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use drivebox_core::error::AppError;
use drivebox_core::result::AppResult;
use drivebox_core::traits::{BlobStore, StoredObject};

/// Blob store backed by a hash map. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    objects: Arc<RwLock<HashMap<String, (String, Bytes)>>>,
    public_base_url: String,
}

impl MemoryBlobStore {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Content type recorded for a key, if the object exists.
    pub async fn content_type(&self, key: &str) -> Option<String> {
        self.objects.read().await.get(key).map(|(ct, _)| ct.clone())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> AppResult<StoredObject> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), (content_type.to_string(), data));
        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    async fn read_bytes(&self, key: &str) -> AppResult<Bytes> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| AppError::not_found(format!("Object not found: {key}")))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.objects.read().await.contains_key(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }

    async fn sign_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String> {
        let expires_at = chrono::Utc::now().timestamp() + expires_in_seconds as i64;
        Ok(format!("{}?expires={expires_at}", self.public_url(key)))
    }
}
