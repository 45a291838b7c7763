//! File ingestion and lifecycle.

pub mod service;

pub use service::{FileService, UploadRequest};
