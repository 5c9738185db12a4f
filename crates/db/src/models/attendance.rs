//! Scan attendance models.

use eindex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eindex_core::attendance::{AttendanceInput, NewAttendance};

/// A row from the `attendance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub date_time: Timestamp,
}

/// An attendance row joined with its subject.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceWithSubject {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub date_time: Timestamp,
    pub subject_code: String,
    pub teacher: String,
}
