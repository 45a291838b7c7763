//! S3-compatible object storage provider (requires the `s3` feature).

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use drivebox_core::config::S3StorageConfig;
use drivebox_core::error::{AppError, ErrorKind};
use drivebox_core::result::AppResult;
use drivebox_core::traits::{BlobStore, StoredObject};

/// Blob store backed by an S3-compatible bucket.
///
/// Credentials are resolved from the standard AWS environment (env vars,
/// profile, instance metadata); only region, bucket and an optional custom
/// endpoint come from application configuration.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store from application configuration.
    pub async fn new(config: &S3StorageConfig) -> Self {
        info!(
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 blob store"
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(config.region.clone()));
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(&config.endpoint);
        }
        let sdk_config = loader.load().await;

        let public_base_url = if config.endpoint.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com",
                config.bucket, config.region
            )
        } else {
            format!("{}/{}", config.endpoint.trim_end_matches('/'), config.bucket)
        };

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> AppResult<StoredObject> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Failed to upload object: {key}"), e)
            })?;

        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    async fn read_bytes(&self, key: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to read object: {key}"),
                        service_err,
                    )
                }
            })?;

        let data = output.body.collect().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to read object body: {key}"), e)
        })?;
        Ok(data.into_bytes())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Failed to delete object: {key}"), e)
            })?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to check object: {key}"),
                        service_err,
                    ))
                }
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }

    async fn sign_url(&self, key: &str, expires_in_seconds: u64) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(expires_in_seconds))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e)
            })?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("Failed to presign URL: {key}"), e)
            })?;

        Ok(presigned.uri().to_string())
    }
}
