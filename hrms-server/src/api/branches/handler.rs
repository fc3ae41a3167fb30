//! Branch API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{BranchPayload, BranchResponse};
use crate::db::repository::BranchRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/branches/ - 获取所有网点
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BranchResponse>>> {
    let repo = BranchRepository::new(state.get_db());
    let branches = repo.find_all().await?;
    Ok(Json(branches))
}

/// GET /api/branches/{id}/ - 获取单个网点
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BranchResponse>> {
    let repo = BranchRepository::new(state.get_db());
    let branch = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Branch not found."))?;
    Ok(Json(branch))
}

/// POST /api/branches/ - 创建网点
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BranchPayload>,
) -> AppResult<(StatusCode, Json<BranchResponse>)> {
    let repo = BranchRepository::new(state.get_db());
    let branch = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(branch)))
}

/// PUT /api/branches/update/{id}/ - 全量更新网点
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BranchPayload>,
) -> AppResult<Json<BranchResponse>> {
    let repo = BranchRepository::new(state.get_db());
    let branch = repo.update(&id, payload).await?;
    Ok(Json(branch))
}

/// DELETE /api/branches/delete/{id}/ - 删除网点
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = BranchRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
