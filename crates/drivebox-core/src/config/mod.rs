//! Configuration schemas and loading.
//!
//! Configuration is read from a TOML file and overridden by
//! `DRIVEBOX__`-prefixed environment variables
//! (e.g. `DRIVEBOX__SERVER__PORT=9090`).

pub mod auth;
pub mod database;
pub mod logging;
pub mod server;
pub mod storage;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use storage::{LocalStorageConfig, S3StorageConfig, StorageConfig};

use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Blob storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a file path, layered with environment
    /// variables. The file is optional; every field has a default.
    pub fn load(path: &str) -> AppResult<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("DRIVEBOX").separator("__"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}
