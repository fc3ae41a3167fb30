//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeePayload};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/employees/ - 获取所有员工
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}/ - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found."))?;
    Ok(Json(employee))
}

/// POST /api/employees/ - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/update/{id} - 全量更新员工
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/delete/{id} - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = EmployeeRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
