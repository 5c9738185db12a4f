//! Handlers for `/api/attendance` (RFID scan events) and the subject list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use eindex_core::types::DbId;
use eindex_db::models::attendance::{Attendance, AttendanceInput, AttendanceWithSubject};
use eindex_db::models::subject::Subject;
use eindex_db::repositories::{AttendanceRepo, SubjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::AttendanceListParams;
use crate::response::{Envelope, NoPayload};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubjectList {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceList {
    pub attendance: Vec<AttendanceWithSubject>,
}

#[derive(Debug, Serialize)]
pub struct CreatedAttendance {
    #[serde(rename = "attendanceId")]
    pub id: DbId,
    pub attendance: Attendance,
}

/// GET /api/attendance/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<SubjectList>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(SubjectList { subjects })))
}

/// GET /api/attendance/students/{student_id}
pub async fn list_by_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<DbId>,
    AppQuery(params): AppQuery<AttendanceListParams>,
) -> AppResult<Json<Envelope<AttendanceList>>> {
    let subject_id = params.subject_id()?;
    let attendance = AttendanceRepo::list_by_student(&state.pool, student_id, subject_id).await?;
    Ok(Json(Envelope::ok(AttendanceList { attendance })))
}

/// POST /api/attendance
///
/// The scan time is taken from the database clock, never from the body.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AttendanceInput>,
) -> AppResult<(StatusCode, Json<Envelope<CreatedAttendance>>)> {
    let new = input.validate()?;
    let attendance = AttendanceRepo::create(&state.pool, &new).await?;
    tracing::info!(
        id = attendance.id,
        student_id = attendance.student_id,
        subject_id = attendance.subject_id,
        "Attendance recorded"
    );

    let body = Envelope::ok(CreatedAttendance {
        id: attendance.id,
        attendance,
    })
    .with_message("Attendance recorded successfully");
    Ok((StatusCode::CREATED, Json(body)))
}

/// DELETE /api/attendance/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<NoPayload>>> {
    if AttendanceRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Attendance deleted");
        Ok(Json(Envelope::message("Attendance record deleted successfully")))
    } else {
        Err(AppError::not_found("Attendance record"))
    }
}
