//! # drivebox-storage
//!
//! Blob storage adapters for DriveBox. Implements the [`BlobStore`] trait
//! from `drivebox-core` for the local filesystem, an in-memory store, and
//! S3 (behind the `s3` cargo feature), plus collision-free object-key
//! generation.
//!
//! [`BlobStore`]: drivebox_core::traits::BlobStore

pub mod key;
pub mod providers;
