//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use drivebox_auth::jwt::JwtDecoder;
use drivebox_core::config::AppConfig;
use drivebox_core::traits::BlobStore;
use drivebox_database::repositories::UserRepository;
use drivebox_service::auth::AuthService;
use drivebox_service::file::FileService;
use drivebox_service::folder::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User repository, for auth-token resolution.
    pub user_repo: Arc<dyn UserRepository>,
    /// Blob store, for health reporting.
    pub blob_store: Arc<dyn BlobStore>,
    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Folder hierarchy service.
    pub folder_service: Arc<FolderService>,
    /// File ingestion service.
    pub file_service: Arc<FileService>,
}
