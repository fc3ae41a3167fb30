//! Attendance API Handlers
//!
//! 查询无记录时返回 404 `{"message": ...}` (前端据此区分"无数据"与其他错误)，
//! 其余错误沿用统一的 `{"detail": ...}` 格式。

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{AttendanceDay, CheckInPayload, CheckOutPayload};
use crate::db::repository::AttendanceRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub emp_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
struct NoRecordsBody {
    message: String,
}

/// GET /api/get_employee_attendance/ - 按员工编号和日期查询
pub async fn query(
    State(state): State<ServerState>,
    Query(params): Query<AttendanceQuery>,
) -> AppResult<Response> {
    run_query(state, params).await
}

/// POST /api/get_employee_attendance/ - 同查询，参数在请求体中
pub async fn query_by_body(
    State(state): State<ServerState>,
    Json(params): Json<AttendanceQuery>,
) -> AppResult<Response> {
    run_query(state, params).await
}

async fn run_query(state: ServerState, params: AttendanceQuery) -> AppResult<Response> {
    let emp_id = params.emp_id.filter(|v| !v.is_empty());
    let date = params.date.filter(|v| !v.is_empty());
    let (Some(emp_id), Some(date)) = (emp_id, date) else {
        return Err(AppError::validation("emp_id and date are required parameters"));
    };
    let date = AttendanceRepository::parse_date(&date)?;

    let repo = AttendanceRepository::new(state.get_db());
    let days = repo.find_by_employee_and_date(&emp_id, date).await?;

    if days.is_empty() {
        let body = NoRecordsBody {
            message: format!(
                "No attendance records found for employee {} on {}",
                emp_id, date
            ),
        };
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    Ok(Json(days).into_response())
}

/// POST /api/employee_attendance-check_in/ - 签到，总是新建一条记录
pub async fn check_in(
    State(state): State<ServerState>,
    Json(payload): Json<CheckInPayload>,
) -> AppResult<(StatusCode, Json<AttendanceDay>)> {
    let repo = AttendanceRepository::new(state.get_db());
    let day = repo.check_in(payload).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// POST /api/employee_attendance-check_out/{id} - 按记录 id 签退
pub async fn check_out(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CheckOutPayload>,
) -> AppResult<Json<AttendanceDay>> {
    let repo = AttendanceRepository::new(state.get_db());
    let day = repo.check_out(&id, payload.check_out).await?;
    Ok(Json(day))
}
