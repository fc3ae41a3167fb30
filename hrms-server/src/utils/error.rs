//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]，按照错误分类映射 HTTP 状态码：
//!
//! | 分类 | 状态码 |
//! |------|--------|
//! | 验证失败 / 唯一性冲突 | 400 |
//! | 未登录 / 令牌无效 | 401 |
//! | 禁止访问 | 403 |
//! | 资源不存在 | 404 |
//! | 数据库 / 内部错误 | 500 |
//!
//! 错误响应体统一为 `{"detail": "<message>"}`。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401/403) ==========
    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    #[error("Token has expired.")]
    TokenExpired,

    #[error("Token is invalid.")]
    InvalidToken,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    NotFound(String),

    /// 唯一性冲突 — 原系统以 400 报告，保持一致
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized
            | AppError::TokenExpired
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 内部错误消息保留在 detail 中便于排查 (内部工具可接受)
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 登录失败统一错误消息，防止用户名枚举
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }
}

/// 处理函数的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
