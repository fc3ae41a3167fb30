//! Authentication Handlers
//!
//! 登录颁发 access + refresh 双令牌；登出是无状态的 (服务端不作废令牌)。

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::JwtError;
use crate::core::ServerState;
use crate::db::repository::AccountRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    detail: &'static str,
}

/// POST /api/auth/login/
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.filter(|u| !u.is_empty());
    let password = req.password.filter(|p| !p.is_empty());
    let (Some(username), Some(password)) = (username, password) else {
        return Err(AppError::validation("Username and password are required."));
    };

    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .find_by_username(&username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !account.is_active {
        tracing::warn!(target: "security", username = %username, "Login attempt on disabled account");
        return Err(AppError::invalid_credentials());
    }

    let password_valid = account
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !password_valid {
        tracing::warn!(target: "security", username = %username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let jwt_service = state.get_jwt_service();
    let account_id = account
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();

    let access = jwt_service
        .generate_access_token(&account_id, &account.username, account.is_superuser)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;
    let refresh = jwt_service
        .generate_refresh_token(&account_id, &account.username, account.is_superuser)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(account_id = %account_id, username = %account.username, "User logged in");

    Ok(Json(LoginResponse {
        access,
        refresh,
        user: UserInfo {
            id: account_id,
            username: account.username,
            first_name: account.first_name,
            last_name: account.last_name,
            is_superuser: account.is_superuser,
        },
    }))
}

/// POST /api/auth/refresh/ - 用刷新令牌换取新的访问令牌
pub async fn refresh(
    State(state): State<ServerState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let token = req
        .refresh
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::validation("Refresh token is required."))?;

    let jwt_service = state.get_jwt_service();
    let claims = jwt_service
        .validate_refresh_token(&token)
        .map_err(|e| match e {
            JwtError::ExpiredToken => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })?;

    let access = jwt_service
        .generate_access_token(&claims.sub, &claims.username, claims.is_superuser)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(Json(RefreshResponse { access }))
}

/// POST /api/auth/logout/ - 无状态登出，前端丢弃令牌即可
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        detail: "Logged out.",
    })
}
