//! # drivebox-service
//!
//! Business logic services for DriveBox.
//!
//! ## Modules
//!
//! - `auth` — user registration and login
//! - `folder` — folder hierarchy, aggregation, and duplicate-name resolution
//! - `file` — file ingestion and lifecycle

pub mod auth;
pub mod file;
pub mod folder;

pub use auth::AuthService;
pub use file::FileService;
pub use folder::FolderService;
