//! Location Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Location entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub location_name: String,
}

/// Stored fields (write side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationContent {
    pub location_name: String,
}

/// Create/update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPayload {
    pub location_name: Option<String>,
}
