//! Employee Model
//!
//! 员工响应只携带引用 ID，不内嵌快照（与原系统契约一致）。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Employee entity — serializes directly as the API response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub emp_id: String,
    pub email: String,
    #[serde(with = "serde_helpers::record_id")]
    pub designation: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub department: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub location: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub branch: RecordId,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub emp_status: bool,
}

fn default_true() -> bool {
    true
}

/// Stored fields (write side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeContent {
    pub name: String,
    pub emp_id: String,
    pub email: String,
    #[serde(with = "serde_helpers::record_id")]
    pub designation: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub department: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub location: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub branch: RecordId,
    pub emp_status: bool,
}

/// Create/update payload — reference fields carry raw ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub emp_id: Option<String>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub branch: Option<String>,
    #[serde(rename = "status")]
    pub emp_status: Option<bool>,
}
