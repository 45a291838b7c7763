//! # drivebox-entity
//!
//! Domain entity models for DriveBox: users, folders, files, and the
//! aggregated folder views produced by the hierarchy engine.

pub mod file;
pub mod folder;
pub mod user;

pub use file::{CreateFile, File};
pub use folder::{CreateFolder, Folder, FolderDetail, FolderSummary, RootListing};
pub use user::{CreateUser, User};
