//! File record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use explorer_core::error::AppError;
use explorer_core::types::{FileId, FolderId, SortOption};
use explorer_entity::file::File;

use crate::dto::ValidatedJson;
use crate::dto::request::{CreateFileRequest, ListFilesQuery, UpdateFileRequest};
use crate::dto::response::{ApiResponse, CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::error::ApiError;
use crate::extractors::RequestCtx;
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ValidatedJson(req): ValidatedJson<CreateFileRequest>,
) -> Result<Json<ApiResponse<CreatedResponse<FileId>>>, ApiError> {
    let file = state.file_service.create_file(&ctx, req.into()).await?;
    Ok(Json(ApiResponse::ok(CreatedResponse { id: file.id })))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    let id: FileId = parse_id("file id", &id)?;
    let file = state.file_service.get_file_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// GET /api/files?folder_id=...&sort=...&order=...
///
/// Without `sort` the files come back in the store's natural order. `order`
/// defaults to `ASC` and is rejected when given without `sort`.
pub async fn list_files(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Query(params): Query<ListFilesQuery>,
) -> Result<Json<ApiResponse<Vec<File>>>, ApiError> {
    let folder_id = params
        .folder_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("folder_id is required"))?;
    let folder_id: FolderId = parse_id("folder_id", folder_id)?;

    let files = match (params.sort.as_deref(), params.order.as_deref()) {
        (Some(field), order) => {
            let sort = SortOption::new(field, order.unwrap_or("ASC"))?;
            state
                .file_service
                .get_files_by_folder_id_sorted(&ctx, folder_id, sort)
                .await?
        }
        (None, Some(_)) => {
            return Err(AppError::validation("order requires a sort field").into());
        }
        (None, None) => state.file_service.get_files_by_folder_id(&ctx, folder_id).await?,
    };

    Ok(Json(ApiResponse::ok(files)))
}

/// PUT /api/files
pub async fn update_file(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ValidatedJson(req): ValidatedJson<UpdateFileRequest>,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    state.file_service.update_file(&ctx, req.into()).await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated: true })))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    ctx: RequestCtx,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let id: FileId = parse_id("file id", &id)?;
    state.file_service.delete_file(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse { deleted: true })))
}
