//! Location API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Location, LocationPayload};
use crate::db::repository::LocationRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/locations/ - 获取所有地点
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Location>>> {
    let repo = LocationRepository::new(state.get_db());
    let locations = repo.find_all().await?;
    Ok(Json(locations))
}

/// GET /api/locations/{id}/ - 获取单个地点
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Location>> {
    let repo = LocationRepository::new(state.get_db());
    let location = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Location not found."))?;
    Ok(Json(location))
}

/// POST /api/locations/ - 创建地点
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LocationPayload>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let repo = LocationRepository::new(state.get_db());
    let location = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// PUT /api/locations/update/{id}/ - 全量更新地点
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LocationPayload>,
) -> AppResult<Json<Location>> {
    let repo = LocationRepository::new(state.get_db());
    let location = repo.update(&id, payload).await?;
    Ok(Json(location))
}

/// DELETE /api/locations/delete/{id}/ - 删除地点
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = LocationRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
