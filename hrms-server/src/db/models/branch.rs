//! Branch Model
//!
//! `location_name` 沿用原系统的线上字段名，实际保存的是地点引用。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::{RefData, serde_helpers};

/// Branch entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub branch_name: String,
    /// Reference to the branch location
    #[serde(with = "serde_helpers::record_id")]
    pub location_name: RecordId,
}

/// Stored fields (write side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchContent {
    pub branch_name: String,
    #[serde(with = "serde_helpers::record_id")]
    pub location_name: RecordId,
}

/// Create/update payload — location_name carries the location id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPayload {
    pub branch_name: Option<String>,
    pub location_name: Option<String>,
}

/// Shaped response with the embedded location snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchResponse {
    pub id: String,
    pub branch_name: String,
    pub location_name: String,
    pub location_data: Option<RefData>,
}
