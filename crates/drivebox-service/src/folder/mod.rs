//! Folder hierarchy, aggregation, and duplicate-name resolution.

pub mod naming;
pub mod service;

pub use naming::resolve_name;
pub use service::FolderService;
