//! DriveBox server — cloud drive backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use drivebox_core::config::AppConfig;
use drivebox_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("DRIVEBOX_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DriveBox v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = drivebox_database::connection::DatabasePool::connect(&config.database).await?;
    db.run_migrations().await?;

    // ── Blob storage ─────────────────────────────────────────────
    tracing::info!(backend = %config.storage.backend, "Initializing blob storage");
    let blob_store = drivebox_storage::providers::build_blob_store(&config.storage).await?;

    // ── Repositories ─────────────────────────────────────────────
    let user_repo: Arc<dyn drivebox_database::repositories::UserRepository> = Arc::new(
        drivebox_database::repositories::PgUserRepository::new(db.pool().clone()),
    );
    let folder_repo: Arc<dyn drivebox_database::repositories::FolderRepository> = Arc::new(
        drivebox_database::repositories::PgFolderRepository::new(db.pool().clone()),
    );
    let file_repo: Arc<dyn drivebox_database::repositories::FileRepository> = Arc::new(
        drivebox_database::repositories::PgFileRepository::new(db.pool().clone()),
    );

    // ── Auth ─────────────────────────────────────────────────────
    let jwt_encoder = drivebox_auth::jwt::JwtEncoder::new(&config.auth);
    let jwt_decoder = Arc::new(drivebox_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(drivebox_service::AuthService::new(
        Arc::clone(&user_repo),
        jwt_encoder,
    ));
    let folder_service = Arc::new(drivebox_service::FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&file_repo),
    ));
    let file_service = Arc::new(drivebox_service::FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&user_repo),
        Arc::clone(&blob_store),
        &config.storage,
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = drivebox_api::AppState {
        config: Arc::new(config),
        jwt_decoder,
        user_repo,
        blob_store,
        auth_service,
        folder_service,
        file_service,
    };

    let app = drivebox_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DriveBox server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("DriveBox server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
