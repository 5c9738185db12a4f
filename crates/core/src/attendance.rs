//! RFID scan attendance input.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::as_integer;

pub const MSG_ATTENDANCE_IDS_REQUIRED: &str = "Student ID and Subject ID are required";

/// Raw body of `POST /api/attendance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceInput {
    pub student_id: Option<Value>,
    pub subject_id: Option<Value>,
}

/// A scan to record. The timestamp is assigned by the database at insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAttendance {
    pub student_id: DbId,
    pub subject_id: DbId,
}

impl AttendanceInput {
    /// Both ids must be present positive integers.
    pub fn validate(&self) -> Result<NewAttendance, CoreError> {
        let id = |v: &Option<Value>| v.as_ref().and_then(as_integer).filter(|id| *id > 0);
        match (id(&self.student_id), id(&self.subject_id)) {
            (Some(student_id), Some(subject_id)) => Ok(NewAttendance {
                student_id,
                subject_id,
            }),
            _ => Err(CoreError::validation(MSG_ATTENDANCE_IDS_REQUIRED)),
        }
    }
}
