//! Attendance record domain model.
//!
//! Records are append-only: one is written each time a user's status
//! transitions to Office or WFH. A transition to Leave writes none —
//! leave days carry no worked hours to record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::WorkStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub org_id: String,
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    /// Reserved for clock-out tracking; the core never populates it.
    pub clock_out: Option<DateTime<Utc>>,
    pub status: WorkStatus,
    pub hours_worked: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendanceRecord {
    pub user_id: String,
    pub org_id: String,
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    pub status: WorkStatus,
    pub hours_worked: f64,
}
