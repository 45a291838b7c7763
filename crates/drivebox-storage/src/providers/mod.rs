//! Blob store provider implementations and the config-driven constructor.

pub mod local;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

use std::sync::Arc;

use drivebox_core::config::StorageConfig;
use drivebox_core::error::AppError;
use drivebox_core::result::AppResult;
use drivebox_core::traits::BlobStore;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
#[cfg(feature = "s3")]
pub use s3::S3BlobStore;

/// Build the blob store selected by configuration.
///
/// The provider is constructed once at startup and injected into the
/// services that need it.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.backend.as_str() {
        "local" => {
            let store =
                LocalBlobStore::new(&config.local.root_path, &config.local.public_base_url).await?;
            Ok(Arc::new(store))
        }
        "memory" => Ok(Arc::new(MemoryBlobStore::new(
            &config.local.public_base_url,
        ))),
        #[cfg(feature = "s3")]
        "s3" => {
            let store = S3BlobStore::new(&config.s3).await;
            Ok(Arc::new(store))
        }
        other => Err(AppError::configuration(format!(
            "Unknown storage backend '{other}'"
        ))),
    }
}
