//! Wire types for the REST API.
//!
//! Responses are `{ success, message?, ...payload }`; [`Envelope`] flattens
//! the payload struct so each endpoint only names its own keys.

use chrono::NaiveDateTime;
use eindex_core::record::RecordType;
use eindex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload of message-only responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoPayload {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    pub id: DbId,
    pub student_id: String,
    pub name: String,
    pub rfid_tag: String,
    pub course: String,
    pub year: i32,
    pub section: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: DbId,
    pub student_id: DbId,
    pub record_type: RecordType,
    pub subject: String,
    pub category: Option<String>,
    pub record_number: Option<i32>,
    pub items: Option<i32>,
    pub score: Option<f64>,
    pub date_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subject {
    pub id: DbId,
    pub code: String,
    pub teacher: String,
}

/// A freshly inserted scan row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attendance {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub date_time: Timestamp,
}

/// A scan row joined with its subject, as returned by listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceEntry {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub date_time: Timestamp,
    pub subject_code: String,
    pub teacher: String,
}

// ---- payloads ----

#[derive(Debug, Clone, Deserialize)]
pub struct StudentList {
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentBody {
    pub student: Student,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedStudent {
    #[serde(rename = "studentId")]
    pub id: DbId,
    pub student: Student,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordList {
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordBody {
    pub record: Record,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRecord {
    #[serde(rename = "recordId")]
    pub id: DbId,
    pub record: Record,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectList {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceList {
    pub attendance: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAttendance {
    #[serde(rename = "attendanceId")]
    pub id: DbId,
    pub attendance: Attendance,
}

/// `GET /health` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}

// ---- request bodies ----

/// Admission/edit form.
#[derive(Debug, Clone, Serialize)]
pub struct StudentForm {
    pub student_id: String,
    pub name: String,
    pub rfid_tag: String,
    pub course: String,
    pub year: i32,
    pub section: String,
}

/// Body for creating or replacing a record, tagged by `record_type`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "record_type", rename_all = "lowercase")]
pub enum NewRecord {
    Academic {
        subject: String,
        category: String,
        record_number: i32,
        items: i32,
        score: f64,
    },
    Attendance {
        subject: String,
        /// `YYYY-MM-DD`
        date: String,
        /// `HH:MM`
        time: String,
    },
}

impl NewRecord {
    /// An attendance mark for the given local wall-clock time.
    pub fn attendance(subject: impl Into<String>, at: NaiveDateTime) -> Self {
        Self::Attendance {
            subject: subject.into(),
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M").to_string(),
        }
    }
}

/// Query string for record listings. `None` leaves a filter off.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewAttendance {
    pub student_id: DbId,
    pub subject_id: DbId,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttendanceQuery {
    #[serde(rename = "subjectId")]
    pub subject_id: DbId,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn envelope_flattens_payload() {
        let body = json!({
            "success": true,
            "message": "Student created successfully",
            "studentId": 7,
            "student": {
                "id": 7,
                "student_id": "21-0001",
                "name": "Ana Cruz",
                "rfid_tag": "1234567890",
                "course": "BSIT",
                "year": 1,
                "section": "A",
                "created_at": "2024-06-01T08:00:00Z",
                "updated_at": "2024-06-01T08:00:00Z"
            }
        });
        let envelope: Envelope<CreatedStudent> = serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.payload.id, 7);
        assert_eq!(envelope.payload.student.rfid_tag, "1234567890");
        assert!(envelope.payload.student.created_at.is_some());
    }

    #[test]
    fn record_bodies_carry_their_type_tag() {
        let academic = NewRecord::Academic {
            subject: "IT223".into(),
            category: "quiz".into(),
            record_number: 1,
            items: 10,
            score: 8.0,
        };
        let json = serde_json::to_value(&academic).unwrap();
        assert_eq!(json["record_type"], "academic");
        assert_eq!(json["items"], 10);

        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap();
        let json = serde_json::to_value(NewRecord::attendance("IT223", at)).unwrap();
        assert_eq!(json["record_type"], "attendance");
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["time"], "08:30");
    }

    #[test]
    fn record_query_skips_unset_filters() {
        let query = RecordQuery {
            category: Some("exam".into()),
            record_type: Some(RecordType::Academic),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, json!({"category": "exam", "type": "academic"}));
    }
}
