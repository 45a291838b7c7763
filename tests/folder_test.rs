//! Folder hierarchy integration tests: naming, aggregates, breadcrumbs,
//! and owner isolation.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_duplicate_folder_names_get_suffixes() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let a = app.create_folder(&token, "Docs", None).await;
    let b = app.create_folder(&token, "Docs", None).await;
    let c = app.create_folder(&token, "Docs", None).await;

    assert_eq!(a["name"], json!("Docs"));
    assert_eq!(b["name"], json!("Docs (1)"));
    assert_eq!(c["name"], json!("Docs (2)"));
}

#[tokio::test]
async fn test_suffix_scoping_is_per_parent_and_owner() {
    let app = TestApp::new();
    let alice = app.register("alice@example.com", "secret123").await;
    let bob = app.register("bob@example.com", "secret123").await;

    let root = app.create_folder(&alice, "Docs", None).await;
    let nested = app
        .create_folder(&alice, "Docs", Some(root["id"].as_str().unwrap()))
        .await;
    let bobs = app.create_folder(&bob, "Docs", None).await;

    // Same name under a different parent or owner needs no suffix.
    assert_eq!(nested["name"], json!("Docs"));
    assert_eq!(bobs["name"], json!("Docs"));
}

#[tokio::test]
async fn test_create_folder_rejects_missing_parent() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/folders",
            Some(&token),
            Some(json!({
                "name": "Docs",
                "parent_folder_id": "00000000-0000-0000-0000-000000000001"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Folder not found"));
}

#[tokio::test]
async fn test_root_listing_has_aggregates_and_recent_files() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let docs = app.create_folder(&token, "Docs", None).await;
    let docs_id = docs["id"].as_str().unwrap();
    app.create_folder(&token, "Empty", None).await;

    app.upload(&token, "a.txt", "text/plain", b"12345", Some(docs_id))
        .await;
    app.upload(&token, "b.txt", "text/plain", b"123", Some(docs_id))
        .await;

    let (status, body) = app
        .request(Method::GET, "/api/folders", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let folders = body["data"]["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 2);

    let docs_summary = folders.iter().find(|f| f["id"] == docs["id"]).unwrap();
    assert_eq!(docs_summary["file_count"], json!(2));
    assert_eq!(docs_summary["total_file_size"], json!(8));

    let empty = folders.iter().find(|f| f["name"] == json!("Empty")).unwrap();
    assert_eq!(empty["file_count"], json!(0));
    assert_eq!(empty["total_file_size"], json!(0));

    let recent = body["data"]["recent_files"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    // Newest first.
    assert_eq!(recent[0]["name"], json!("b.txt"));
    assert_eq!(recent[1]["name"], json!("a.txt"));
}

#[tokio::test]
async fn test_recent_files_capped_at_five() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    for i in 0..7 {
        app.upload(&token, &format!("f{i}.txt"), "text/plain", b"x", None)
            .await;
    }

    let (_, body) = app
        .request(Method::GET, "/api/folders", Some(&token), None)
        .await;
    let recent = body["data"]["recent_files"].as_array().unwrap();

    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["name"], json!("f6.txt"));
    assert_eq!(recent[4]["name"], json!("f2.txt"));
}

#[tokio::test]
async fn test_folder_detail_breadcrumb_is_root_first() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let a = app.create_folder(&token, "A", None).await;
    let b = app
        .create_folder(&token, "B", Some(a["id"].as_str().unwrap()))
        .await;
    let c = app
        .create_folder(&token, "C", Some(b["id"].as_str().unwrap()))
        .await;

    let uri = format!("/api/folders/{}", c["id"].as_str().unwrap());
    let (status, body) = app.request(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let breadcrumb = body["data"]["breadcrumb"].as_array().unwrap();
    let names: Vec<&str> = breadcrumb
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(body["data"]["name"], json!("C"));
}

#[tokio::test]
async fn test_folder_detail_direct_contents_and_aggregates() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let parent = app.create_folder(&token, "Parent", None).await;
    let parent_id = parent["id"].as_str().unwrap();
    let child = app.create_folder(&token, "Child", Some(parent_id)).await;

    app.upload(&token, "direct.txt", "text/plain", b"1234567890", Some(parent_id))
        .await;
    app.upload(
        &token,
        "nested.txt",
        "text/plain",
        b"xx",
        Some(child["id"].as_str().unwrap()),
    )
    .await;

    let (_, body) = app
        .request(
            Method::GET,
            &format!("/api/folders/{parent_id}"),
            Some(&token),
            None,
        )
        .await;

    let files = body["data"]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], json!("direct.txt"));

    let sub_folders = body["data"]["sub_folders"].as_array().unwrap();
    assert_eq!(sub_folders.len(), 1);
    assert_eq!(sub_folders[0]["id"], child["id"]);

    // Aggregates cover direct files only, not the nested one.
    assert_eq!(body["data"]["file_count"], json!(1));
    assert_eq!(body["data"]["total_file_size"], json!(10));
}

#[tokio::test]
async fn test_folder_access_is_owner_isolated() {
    let app = TestApp::new();
    let alice = app.register("alice@example.com", "secret123").await;
    let bob = app.register("bob@example.com", "secret123").await;

    let folder = app.create_folder(&alice, "Private", None).await;
    let uri = format!("/api/folders/{}", folder["id"].as_str().unwrap());

    let (status, _) = app.request(Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request(Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still there for its owner.
    let (status, _) = app.request(Method::GET, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_folder_does_not_cascade() {
    let app = TestApp::new();
    let token = app.register("alice@example.com", "secret123").await;

    let parent = app.create_folder(&token, "Parent", None).await;
    let parent_id = parent["id"].as_str().unwrap();
    let child = app.create_folder(&token, "Child", Some(parent_id)).await;

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/folders/{parent_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(
            Method::GET,
            &format!("/api/folders/{}", child["id"].as_str().unwrap()),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}
