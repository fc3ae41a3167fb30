//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentPayload};
use crate::db::repository::DepartmentRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/departments/ - 获取所有部门
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let repo = DepartmentRepository::new(state.get_db());
    let departments = repo.find_all().await?;
    Ok(Json(departments))
}

/// GET /api/departments/{id}/ - 获取单个部门
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    let repo = DepartmentRepository::new(state.get_db());
    let department = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Department not found."))?;
    Ok(Json(department))
}

/// POST /api/departments/ - 创建部门
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentPayload>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let repo = DepartmentRepository::new(state.get_db());
    let department = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/departments/update/{id}/ - 全量更新部门
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DepartmentPayload>,
) -> AppResult<Json<Department>> {
    let repo = DepartmentRepository::new(state.get_db());
    let department = repo.update(&id, payload).await?;
    Ok(Json(department))
}

/// DELETE /api/departments/delete/{id}/ - 删除部门
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = DepartmentRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
