//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录、登出、令牌刷新
//! - [`employees`] - 员工档案接口
//! - [`departments`] - 部门管理接口
//! - [`designations`] - 职位管理接口
//! - [`locations`] - 地点管理接口
//! - [`branches`] - 网点管理接口
//! - [`attendance`] - 考勤接口

pub mod auth;
pub mod health;

// Master data API
pub mod branches;
pub mod departments;
pub mod designations;
pub mod employees;
pub mod locations;

// Attendance API
pub mod attendance;
