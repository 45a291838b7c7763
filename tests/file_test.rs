//! File upload and lifecycle integration tests.

mod common;

use axum::http::{Method, StatusCode};
use drivebox_core::traits::BlobStore;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_upload_round_trip() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let (status, body) = app
        .upload(&token, "report.pdf", "application/pdf", b"pdf contents", None)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], json!("report.pdf"));
    assert_eq!(body["data"]["mime_type"], json!("application/pdf"));
    assert_eq!(body["data"]["size_bytes"], json!(12));

    let key = body["data"]["storage_key"].as_str().unwrap();
    assert!(key.starts_with("drive/report-"));
    assert!(key.ends_with(".pdf"));

    // The stored bytes and recorded mime type match what was sent.
    let stored = app.blobs.read_bytes(key).await.unwrap();
    assert_eq!(&stored[..], b"pdf contents");
    assert_eq!(
        app.blobs.content_type(key).await.as_deref(),
        Some("application/pdf")
    );

    let url = body["data"]["public_url"].as_str().unwrap();
    assert!(url.ends_with(key));
}

#[tokio::test]
async fn test_upload_into_folder() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;
    let folder = app.create_folder(&token, "Docs", None).await;
    let folder_id = folder["id"].as_str().unwrap();

    let (status, body) = app
        .upload(&token, "notes.txt", "text/plain", b"hello", Some(folder_id))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["folder_id"], folder["id"]);
    let key = body["data"]["storage_key"].as_str().unwrap();
    assert!(key.contains("/Docs/"));
}

#[tokio::test]
async fn test_upload_strips_directory_prefix_from_file_name() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let (status, body) = app
        .upload(&token, "../../escape.txt", "text/plain", b"x", None)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let key = body["data"]["storage_key"].as_str().unwrap();
    assert!(key.starts_with("drive/escape-"));
    assert!(!key.contains(".."));
}

#[tokio::test]
async fn test_upload_to_missing_folder_is_not_found() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let (status, body) = app
        .upload(
            &token,
            "notes.txt",
            "text/plain",
            b"hello",
            Some("00000000-0000-0000-0000-000000000001"),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Folder not found"));
    assert_eq!(app.blobs.len().await, 0);
}

#[tokio::test]
async fn test_oversize_upload_leaves_no_trace() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    // One byte over the 10 MiB default cap.
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];
    let (status, body) = app
        .upload(&token, "huge.bin", "application/octet-stream", &oversized, None)
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], json!("File size exceeds the limit of 10MB"));
    assert_eq!(app.blobs.len().await, 0);

    let (_, listing) = app
        .request(Method::GET, "/api/files", Some(&token), None)
        .await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_files_is_owner_scoped() {
    let app = TestApp::new();
    let alice = app.register("alice@example.com", "secret123").await;
    let bob = app.register("bob@example.com", "secret123").await;

    app.upload(&alice, "mine.txt", "text/plain", b"a", None).await;
    app.upload(&bob, "theirs.txt", "text/plain", b"b", None).await;

    let (status, body) = app
        .request(Method::GET, "/api/files", Some(&alice), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let files = body["data"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], json!("mine.txt"));
}

#[tokio::test]
async fn test_delete_file_keeps_blob() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let (_, body) = app
        .upload(&token, "notes.txt", "text/plain", b"hello", None)
        .await;
    let file_id = body["data"]["id"].as_str().unwrap();
    let key = body["data"]["storage_key"].as_str().unwrap().to_string();

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/files/{file_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = app
        .request(Method::GET, "/api/files", Some(&token), None)
        .await;
    assert!(listing["data"].as_array().unwrap().is_empty());

    // Metadata-only delete: the blob stays behind.
    assert!(app.blobs.exists(&key).await.unwrap());
}

#[tokio::test]
async fn test_delete_file_is_owner_scoped() {
    let app = TestApp::new();
    let alice = app.register("alice@example.com", "secret123").await;
    let bob = app.register("bob@example.com", "secret123").await;

    let (_, body) = app
        .upload(&alice, "mine.txt", "text/plain", b"a", None)
        .await;
    let file_id = body["data"]["id"].as_str().unwrap();

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/files/{file_id}"),
            Some(&bob),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let boundary = "drivebox-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"parent_folder_id\"\r\n\r\n\r\n--{boundary}--\r\n"
    );

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/files")
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
