//! Route definitions for the explorer HTTP API.
//!
//! All routes are mounted under `/api`. Every folder and file operation is
//! registered through [`logged`] with the name it is logged under.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::{logged, request_logging};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(file_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Folder CRUD and listing
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            logged("CreateFolder", post(handlers::folder::create_folder)),
        )
        .route(
            "/folders",
            logged("GetFoldersByParentID", get(handlers::folder::list_folders)),
        )
        .route(
            "/folders",
            logged("UpdateFolder", put(handlers::folder::update_folder)),
        )
        .route(
            "/folders/{id}",
            logged("GetFolderByID", get(handlers::folder::get_folder)),
        )
        .route(
            "/folders/{id}",
            logged("DeleteFolder", delete(handlers::folder::delete_folder)),
        )
}

/// File CRUD and listing
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", logged("CreateFile", post(handlers::file::create_file)))
        .route(
            "/files",
            logged("GetFilesByFolderID", get(handlers::file::list_files)),
        )
        .route("/files", logged("UpdateFile", put(handlers::file::update_file)))
        .route(
            "/files/{id}",
            logged("GetFileByID", get(handlers::file::get_file)),
        )
        .route(
            "/files/{id}",
            logged("DeleteFile", delete(handlers::file::delete_file)),
        )
}

/// Liveness and database connectivity
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
