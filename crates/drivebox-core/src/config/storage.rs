//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selector: "local", "memory", or "s3".
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Maximum upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Default signed-URL expiry in seconds.
    #[serde(default = "default_sign_url_expiry")]
    pub sign_url_expiry_seconds: u64,
    /// Local filesystem configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// S3 configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

impl StorageConfig {
    /// The configured maximum upload size expressed in whole megabytes,
    /// used in the payload-too-large message.
    pub fn max_upload_size_mb(&self) -> u64 {
        self.max_upload_size_bytes / (1024 * 1024)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            max_upload_size_bytes: default_max_upload(),
            sign_url_expiry_seconds: default_sign_url_expiry(),
            local: LocalStorageConfig::default(),
            s3: S3StorageConfig::default(),
        }
    }
}

/// Local filesystem blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for stored objects.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Base URL under which stored objects are publicly served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket for publicly served objects.
    #[serde(default)]
    pub bucket: String,
    /// Optional custom endpoint (for S3-compatible services).
    #[serde(default)]
    pub endpoint: String,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            bucket: String::new(),
            endpoint: String::new(),
        }
    }
}

fn default_backend() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024 // 10 MiB
}

fn default_sign_url_expiry() -> u64 {
    3600
}

fn default_local_root() -> String {
    "./data/blobs".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/static".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
