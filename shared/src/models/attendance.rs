//! Attendance model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// Attendance record with the employee snapshot embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    /// Calendar day, `YYYY-MM-DD`
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub employee_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub employee: AttendanceEmployee,
}

/// Employee snapshot embedded in an attendance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEmployee {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub employee_id: i64,
}

/// Status-only attendance update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusUpdate {
    pub status: AttendanceStatus,
}

/// Query string for the attendance-by-date endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListQuery {
    pub page: u32,
    pub per_page: u32,
    /// Day to list, `YYYY-MM-DD`
    pub date: NaiveDate,
}
