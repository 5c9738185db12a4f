//! Student records: academic grade entries and manually entered attendance.
//!
//! Both shapes share the `records` table. The request body names its shape in
//! `record_type`; [`RecordInput::into_payload`] turns the loose body into a
//! [`RecordPayload`] so the rest of the stack matches on a closed enum.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::{as_integer, as_number, is_present, required_text};

pub const MSG_ACADEMIC_FIELDS_REQUIRED: &str = "All fields are required for academic records";
pub const MSG_RECORD_NUMBER: &str = "Record number must be a positive integer";
pub const MSG_ITEMS: &str = "Items must be a positive integer";
pub const MSG_ATTENDANCE_FIELDS_REQUIRED: &str =
    "Subject, date, and time are required for attendance records";
pub const MSG_DATE_TIME_FORMAT: &str = "Invalid date or time format";
pub const MSG_INVALID_RECORD_TYPE: &str = "Invalid record type";

/// Discriminator stored in `records.record_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    #[default]
    Academic,
    Attendance,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Attendance => "attendance",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "academic" => Ok(Self::Academic),
            "attendance" => Ok(Self::Attendance),
            _ => Err(CoreError::validation(MSG_INVALID_RECORD_TYPE)),
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Raw record body. Numeric fields stay as JSON values until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordInput {
    pub record_type: Option<String>,
    pub subject: Option<String>,
    pub category: Option<String>,
    pub record_number: Option<Value>,
    pub items: Option<Value>,
    pub score: Option<Value>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// A graded assessment entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicRecord {
    pub subject: String,
    pub category: String,
    pub record_number: i32,
    pub items: i32,
    pub score: f64,
}

/// A manually entered attendance mark with a client-chosen timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceMark {
    pub subject: String,
    pub date_time: Timestamp,
}

/// A validated record body.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPayload {
    Academic(AcademicRecord),
    Attendance(AttendanceMark),
}

impl RecordPayload {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Academic(_) => RecordType::Academic,
            Self::Attendance(_) => RecordType::Attendance,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Self::Academic(r) => &r.subject,
            Self::Attendance(m) => &m.subject,
        }
    }
}

impl RecordInput {
    /// Resolve `record_type` (default `academic`) and validate the matching shape.
    pub fn into_payload(self) -> Result<RecordPayload, CoreError> {
        let record_type = match required_text(self.record_type.as_deref()) {
            Some(t) => t.parse()?,
            None => RecordType::default(),
        };
        match record_type {
            RecordType::Academic => self.into_academic().map(RecordPayload::Academic),
            RecordType::Attendance => self.into_attendance().map(RecordPayload::Attendance),
        }
    }

    fn into_academic(self) -> Result<AcademicRecord, CoreError> {
        let (Some(subject), Some(category), Some(record_number), Some(items), Some(score)) = (
            required_text(self.subject.as_deref()),
            required_text(self.category.as_deref()),
            self.record_number.filter(|v| is_present(Some(v))),
            self.items.filter(|v| is_present(Some(v))),
            self.score.filter(|v| is_present(Some(v))),
        ) else {
            return Err(CoreError::validation(MSG_ACADEMIC_FIELDS_REQUIRED));
        };

        let record_number = positive_i32(&record_number)
            .ok_or_else(|| CoreError::validation(MSG_RECORD_NUMBER))?;
        let items = positive_i32(&items).ok_or_else(|| CoreError::validation(MSG_ITEMS))?;
        let score = as_number(&score)
            .filter(|s| (0.0..=f64::from(items)).contains(s))
            .ok_or_else(|| {
                CoreError::Validation(format!("Score must be between 0 and {items}"))
            })?;

        Ok(AcademicRecord {
            subject,
            category,
            record_number,
            items,
            score,
        })
    }

    fn into_attendance(self) -> Result<AttendanceMark, CoreError> {
        let (Some(subject), Some(date), Some(time)) = (
            required_text(self.subject.as_deref()),
            required_text(self.date.as_deref()),
            required_text(self.time.as_deref()),
        ) else {
            return Err(CoreError::validation(MSG_ATTENDANCE_FIELDS_REQUIRED));
        };

        let date_time = combine_date_time(&date, &time)
            .ok_or_else(|| CoreError::validation(MSG_DATE_TIME_FORMAT))?;
        Ok(AttendanceMark { subject, date_time })
    }
}

fn positive_i32(value: &Value) -> Option<i32> {
    as_integer(value)
        .and_then(|n| i32::try_from(n).ok())
        .filter(|n| *n >= 1)
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM[:SS]` time into a UTC timestamp.
pub fn combine_date_time(date: &str, time: &str) -> Option<Timestamp> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;
    Some(NaiveDateTime::new(date, time).and_utc())
}
