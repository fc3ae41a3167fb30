//! Designation API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{DesignationPayload, DesignationResponse};
use crate::db::repository::DesignationRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/designations/ - 获取所有职位
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DesignationResponse>>> {
    let repo = DesignationRepository::new(state.get_db());
    let designations = repo.find_all().await?;
    Ok(Json(designations))
}

/// GET /api/designations/{id}/ - 获取单个职位
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DesignationResponse>> {
    let repo = DesignationRepository::new(state.get_db());
    let designation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Designation not found."))?;
    Ok(Json(designation))
}

/// POST /api/designations/ - 创建职位
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DesignationPayload>,
) -> AppResult<(StatusCode, Json<DesignationResponse>)> {
    let repo = DesignationRepository::new(state.get_db());
    let designation = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(designation)))
}

/// PUT /api/designations/update/{id}/ - 全量更新职位
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DesignationPayload>,
) -> AppResult<Json<DesignationResponse>> {
    let repo = DesignationRepository::new(state.get_db());
    let designation = repo.update(&id, payload).await?;
    Ok(Json(designation))
}

/// DELETE /api/designations/delete/{id}/ - 删除职位
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = DesignationRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
