//! Attendance API 模块

mod handler;

pub use handler::AttendanceQuery;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/get_employee_attendance/",
            get(handler::query).post(handler::query_by_body),
        )
        .route(
            "/api/employee_attendance-check_in/",
            post(handler::check_in),
        )
        .route(
            "/api/employee_attendance-check_out/{id}",
            post(handler::check_out),
        )
}
