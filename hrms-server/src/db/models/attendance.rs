//! Attendance Model
//!
//! 每次签到各生成一条独立文档，按 (员工编号, 日期) 查询。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use surrealdb::RecordId;

use super::serde_helpers;

/// Attendance day status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Halfday,
}

/// Embedded check-in/check-out record bag
///
/// `check_in`/`check_out` are time strings; extra keys are preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRecords {
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One persisted attendance document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDay {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Employee *code*, not employee document id
    pub emp_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub records: AttendanceRecords,
}

impl AttendanceDay {
    /// Open = has check-in but no check-out yet
    pub fn is_open(&self) -> bool {
        !self.records.check_in.is_empty() && self.records.check_out.is_empty()
    }
}

/// Stored fields (write side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceContent {
    pub emp_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub records: AttendanceRecords,
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInPayload {
    pub employee_id: Option<String>,
    pub date: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// Check-out payload — the attendance document id travels in the URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutPayload {
    pub check_out: Option<String>,
}
