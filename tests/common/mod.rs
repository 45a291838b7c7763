//! Shared fixtures for the HTTP integration tests.
//!
//! The full router is exercised in-process against in-memory stores, so
//! tests need no running PostgreSQL or blob backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use drivebox_api::{build_router, AppState};
use drivebox_auth::jwt::{JwtDecoder, JwtEncoder};
use drivebox_core::config::AppConfig;
use drivebox_database::memory::{
    MemoryFileRepository, MemoryFolderRepository, MemoryUserRepository,
};
use drivebox_service::{AuthService, FileService, FolderService};
use drivebox_storage::providers::MemoryBlobStore;

/// A fully wired application over in-memory stores.
pub struct TestApp {
    pub router: Router,
    pub blobs: Arc<MemoryBlobStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig::default();

        let users = Arc::new(MemoryUserRepository::new());
        let folders = Arc::new(MemoryFolderRepository::new());
        let files = Arc::new(MemoryFileRepository::new());
        let blobs = Arc::new(MemoryBlobStore::new(&config.storage.local.public_base_url));

        let jwt_encoder = JwtEncoder::new(&config.auth);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(users.clone(), jwt_encoder));
        let folder_service = Arc::new(FolderService::new(folders.clone(), files.clone()));
        let file_service = Arc::new(FileService::new(
            files.clone(),
            folders.clone(),
            users.clone(),
            blobs.clone(),
            &config.storage,
        ));

        let state = AppState {
            config: Arc::new(config),
            jwt_decoder,
            user_repo: users,
            blob_store: blobs.clone(),
            auth_service,
            folder_service,
            file_service,
        };

        Self {
            router: build_router(state),
            blobs,
        }
    }

    /// Sends a request and returns the status plus parsed JSON body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Sends a multipart upload to `POST /api/files`.
    pub async fn upload(
        &self,
        token: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
        parent_folder_id: Option<&str>,
    ) -> (StatusCode, Value) {
        let boundary = "drivebox-test-boundary";
        let mut body = Vec::new();

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");

        if let Some(folder_id) = parent_folder_id {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            body.extend_from_slice(
                b"Content-Disposition: form-data; name=\"parent_folder_id\"\r\n\r\n",
            );
            body.extend_from_slice(folder_id.as_bytes());
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/files")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    /// Registers a user and returns their access token.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Creates a folder and returns its JSON representation.
    pub async fn create_folder(
        &self,
        token: &str,
        name: &str,
        parent_folder_id: Option<&str>,
    ) -> Value {
        let mut payload = serde_json::json!({ "name": name });
        if let Some(parent) = parent_folder_id {
            payload["parent_folder_id"] = Value::String(parent.to_string());
        }

        let (status, body) = self
            .request(Method::POST, "/api/folders", Some(token), Some(payload))
            .await;
        assert_eq!(status, StatusCode::CREATED, "folder create failed: {body}");
        body["data"].clone()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
