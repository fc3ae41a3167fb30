//! Department Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Department entity — free-text fields only, no cross-references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub location: String,
}

/// Stored fields (write side — id is assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentContent {
    pub name: String,
    pub description: String,
    pub manager: String,
    pub location: String,
}

/// Create/update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manager: Option<String>,
    pub location: Option<String>,
}
