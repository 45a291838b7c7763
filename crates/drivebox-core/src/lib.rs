//! # drivebox-core
//!
//! Core crate for DriveBox. Contains the blob-store trait, configuration
//! schemas, shared response types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DriveBox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
