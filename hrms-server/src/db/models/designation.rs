//! Designation Model
//!
//! `department_name` 沿用原系统的线上字段名，实际保存的是部门引用。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::{RefData, serde_helpers};

/// Designation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub designation_name: String,
    /// Reference to the owning department
    #[serde(with = "serde_helpers::record_id")]
    pub department_name: RecordId,
}

/// Stored fields (write side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationContent {
    pub designation_name: String,
    #[serde(with = "serde_helpers::record_id")]
    pub department_name: RecordId,
}

/// Create/update payload — department_name carries the department id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationPayload {
    pub designation_name: Option<String>,
    pub department_name: Option<String>,
}

/// Shaped response with the embedded department snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationResponse {
    pub id: String,
    pub designation_name: String,
    pub department_name: String,
    pub department_data: Option<RefData>,
}
