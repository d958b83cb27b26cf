//! Folder CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use explorer_core::types::FolderId;
use explorer_entity::folder::Folder;

use crate::dto::ValidatedJson;
use crate::dto::request::{CreateFolderRequest, ListFoldersQuery, UpdateFolderRequest};
use crate::dto::response::{ApiResponse, CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::error::ApiError;
use crate::extractors::RequestCtx;
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<Json<ApiResponse<CreatedResponse<FolderId>>>, ApiError> {
    let folder = state.folder_service.create_folder(&ctx, req.into()).await?;
    Ok(Json(ApiResponse::ok(CreatedResponse { id: folder.id })))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let id: FolderId = parse_id("folder id", &id)?;
    let folder = state.folder_service.get_folder_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders?parent_id=...
///
/// Lists root folders when `parent_id` is absent or empty.
pub async fn list_folders(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Query(params): Query<ListFoldersQuery>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let parent_id = params
        .parent_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| parse_id::<FolderId>("parent_id", s))
        .transpose()?;

    let folders = state
        .folder_service
        .get_folders_by_parent_id(&ctx, parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// PUT /api/folders
pub async fn update_folder(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ValidatedJson(req): ValidatedJson<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    state.folder_service.update_folder(&ctx, req.into()).await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated: true })))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let id: FolderId = parse_id("folder id", &id)?;
    state.folder_service.delete_folder(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse { deleted: true })))
}
