//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod account;

// Master data
pub mod branch;
pub mod department;
pub mod designation;
pub mod employee;
pub mod location;

// Attendance
pub mod attendance;

use serde::{Deserialize, Serialize};

/// Embedded reference snapshot `{id, name}` used in shaped responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefData {
    pub id: String,
    pub name: String,
}

// Re-exports
pub use account::{Account, AccountContent, AccountCreate};
pub use attendance::{
    AttendanceContent, AttendanceDay, AttendanceRecords, AttendanceStatus, CheckInPayload,
    CheckOutPayload,
};
pub use branch::{Branch, BranchContent, BranchPayload, BranchResponse};
pub use department::{Department, DepartmentContent, DepartmentPayload};
pub use designation::{Designation, DesignationContent, DesignationPayload, DesignationResponse};
pub use employee::{Employee, EmployeeContent, EmployeePayload};
pub use location::{Location, LocationContent, LocationPayload};
