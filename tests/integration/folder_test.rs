//! Integration tests for folder operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_folder() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("docs", None).await;

    let response = app.request("GET", &format!("/api/folders/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["id"], id);
    assert_eq!(response.data()["name"], "docs");
    assert_eq!(response.data()["owner_id"], "owner-1");
    assert!(response.data()["parent_id"].is_null());
    assert!(response.data()["created_at"].is_string());
}

#[tokio::test]
async fn test_get_folder_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/folders/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_folder_with_invalid_id() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/folders/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION");
}

#[tokio::test]
async fn test_create_folder_with_empty_name() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "", "owner_id": "owner-1" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION");
}

#[tokio::test]
async fn test_create_folder_with_malformed_body() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/folders", Some(json!({ "owner_id": "owner-1" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION");
}

#[tokio::test]
async fn test_create_folder_under_missing_parent() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "orphan", "owner_id": "owner-1", "parent_id": 42 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "STORAGE");
}

#[tokio::test]
async fn test_list_folders_by_parent() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(a)).await;
    app.create_folder("C", Some(a)).await;
    app.create_folder("D", Some(b)).await;

    let response = app
        .request("GET", &format!("/api/folders?parent_id={a}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let mut names = response.names();
    names.sort();
    assert_eq!(names, vec!["B", "C"]);

    let response = app
        .request("GET", &format!("/api/folders?parent_id={b}"), None)
        .await;
    assert_eq!(response.names(), vec!["D"]);

    let response = app.request("GET", "/api/folders", None).await;
    assert_eq!(response.names(), vec!["A"]);
}

#[tokio::test]
async fn test_list_folders_with_invalid_parent() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/folders?parent_id=x1", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_folder() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", None).await;

    let response = app
        .request(
            "PUT",
            "/api/folders",
            Some(json!({ "id": b, "name": "B2", "parent_id": a })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["updated"], true);

    let response = app.request("GET", &format!("/api/folders/{b}"), None).await;
    assert_eq!(response.data()["name"], "B2");
    assert_eq!(response.data()["parent_id"], a);
}

#[tokio::test]
async fn test_update_missing_folder() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("PUT", "/api/folders", Some(json!({ "id": 77, "name": "ghost" })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_twice() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("tmp", None).await;

    let first = app.request("DELETE", &format!("/api/folders/{id}"), None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data()["deleted"], true);

    let second = app.request("DELETE", &format!("/api/folders/{id}"), None).await;
    assert_eq!(second.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/folders/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_non_empty_folder() {
    let app = helpers::TestApp::new().await;
    let parent = app.create_folder("parent", None).await;
    app.create_file("a.txt", parent, &[]).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{parent}"), None)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "STORAGE");

    let response = app
        .request("GET", &format!("/api/folders/{parent}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unsupported_method_is_not_logged_as_an_operation() {
    let app = helpers::TestApp::new().await;
    let (logs, _guard) = helpers::capture_logs();

    let response = app.request("PATCH", "/api/folders", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    let response = app.request("PATCH", "/api/files", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(!logs.contents().contains("Operation"), "{}", logs.contents());

    let response = app.request("GET", "/api/folders/999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let output = logs.contents();
    assert!(output.contains("Operation failed"), "{output}");
    assert!(output.contains("GetFolderByID"), "{output}");
}

#[tokio::test]
async fn test_expired_deadline_returns_gateway_timeout() {
    let mut config = helpers::test_config();
    config.server.request_timeout_seconds = 0;
    let app = helpers::TestApp::with_config(config).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(response.error_code(), "TIMEOUT");
}

#[tokio::test]
async fn test_cancelled_requests_return_service_unavailable() {
    let app = helpers::TestApp::new().await;
    app.state.shutdown.cancel();

    let response = app.request("GET", "/api/folders/1", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), "CANCELLED");
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.data()["database"], "unavailable");
}
