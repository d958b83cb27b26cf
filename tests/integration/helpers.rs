//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;

use explorer_api::{AppState, build_router};
use explorer_core::config::AppConfig;
use explorer_database::DatabasePool;
use explorer_service::testing::MemoryStore;
use explorer_service::{FileService, FolderService};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing in-memory store
    pub store: Arc<MemoryStore>,
    /// Application state the router was built from
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application with a custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());

        // Never reached by the folder and file routes; only the health
        // check talks to it, and it points at a closed port.
        let db = DatabasePool::connect_lazy(&config.database);

        let state = AppState::new(
            Arc::new(config),
            db,
            Arc::new(FolderService::new(store.clone())),
            Arc::new(FileService::new(store.clone())),
        );

        Self {
            router: build_router(state.clone()),
            store,
            state,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a folder through the API and return its ID
    pub async fn create_folder(&self, name: &str, parent_id: Option<i64>) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": name, "owner_id": "owner-1", "parent_id": parent_id })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create folder failed: {:?}",
            response.body
        );
        response.id()
    }

    /// Create a file through the API and return its ID
    pub async fn create_file(&self, name: &str, folder_id: i64, tags: &[&str]) -> i64 {
        let response = self
            .request("POST", "/api/files", Some(file_body(name, folder_id, tags)))
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create file failed: {:?}",
            response.body
        );
        response.id()
    }
}

/// Configuration for tests: nothing listens on the database port.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.host = "127.0.0.1".to_string();
    config.database.port = 1;
    config.database.min_connections = 0;
    config.database.connect_timeout_seconds = 1;
    config
}

/// JSON body for `POST /api/files`
pub fn file_body(name: &str, folder_id: i64, tags: &[&str]) -> Value {
    json!({
        "name": name,
        "owner_id": "owner-1",
        "folder_id": folder_id,
        "object_path": format!("objects/{name}"),
        "size": name.len(),
        "type": "text/plain",
        "tags": tags,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success body
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `data.id` member of a create response
    pub fn id(&self) -> i64 {
        self.data()["id"].as_i64().expect("No id in response")
    }

    /// The `error` code of a failure body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The `name` field of every item in a list response
    pub fn names(&self) -> Vec<String> {
        self.data()
            .as_array()
            .expect("data is not a list")
            .iter()
            .filter_map(|item| item["name"].as_str().map(String::from))
            .collect()
    }
}

/// Log output captured from the current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything written so far
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route log events on this thread into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (buffer, tracing::subscriber::set_default(subscriber))
}
