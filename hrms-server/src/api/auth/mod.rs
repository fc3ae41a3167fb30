//! 认证 API 模块

mod handler;

pub use handler::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo};

use axum::{Router, routing::post};

use crate::core::ServerState;

/// 认证路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login/", post(handler::login))
        .route("/logout/", post(handler::logout))
        .route("/refresh/", post(handler::refresh))
}
