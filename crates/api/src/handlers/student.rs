//! Handlers for the `/api/students` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use eindex_core::error::CoreError;
use eindex_core::student::MSG_STUDENT_HAS_DEPENDENTS;
use eindex_core::types::DbId;
use eindex_db::models::record::Record;
use eindex_db::models::student::{Student, StudentInput};
use eindex_db::repositories::{RecordRepo, StudentRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::RecordListParams;
use crate::response::{Envelope, NoPayload};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StudentList {
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize)]
pub struct StudentBody {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct CreatedStudent {
    #[serde(rename = "studentId")]
    pub id: DbId,
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct StudentRecords {
    pub records: Vec<Record>,
}

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<StudentList>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(StudentList { students })))
}

/// GET /api/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<StudentBody>>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Student"))?;
    Ok(Json(Envelope::ok(StudentBody { student })))
}

/// GET /api/students/rfid/{tag}
pub async fn find_by_rfid(
    State(state): State<AppState>,
    AppPath(tag): AppPath<String>,
) -> AppResult<Json<Envelope<StudentBody>>> {
    let student = StudentRepo::find_by_rfid(&state.pool, tag.trim())
        .await?
        .ok_or(AppError::not_found("Student"))?;
    Ok(Json(Envelope::ok(StudentBody { student })))
}

/// GET /api/students/{id}/records
///
/// Same listing as `/api/records/{id}/records`, kept for the profile page.
pub async fn list_records(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<RecordListParams>,
) -> AppResult<Json<Envelope<StudentRecords>>> {
    let filter = params.into_filter()?;
    let records = RecordRepo::list_by_student(&state.pool, id, &filter).await?;
    Ok(Json(Envelope::ok(StudentRecords { records })))
}

/// POST /api/students
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<StudentInput>,
) -> AppResult<(StatusCode, Json<Envelope<CreatedStudent>>)> {
    let fields = input.validate()?;
    let student = StudentRepo::create(&state.pool, &fields).await?;
    tracing::info!(id = student.id, student_id = %student.student_id, "Student created");

    let body = Envelope::ok(CreatedStudent {
        id: student.id,
        student,
    })
    .with_message("Student created successfully");
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /api/students/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<StudentInput>,
) -> AppResult<Json<Envelope<StudentBody>>> {
    let fields = input.validate()?;
    let student = StudentRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::not_found("Student"))?;
    Ok(Json(
        Envelope::ok(StudentBody { student }).with_message("Student updated successfully"),
    ))
}

/// DELETE /api/students/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<NoPayload>>> {
    let deleted = StudentRepo::delete(&state.pool, id)
        .await
        .map_err(|err| {
            // Records and attendance reference students with NO ACTION.
            let has_dependents = matches!(
                &err,
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation()
            );
            if has_dependents {
                AppError::from(CoreError::Conflict(MSG_STUDENT_HAS_DEPENDENTS.to_string()))
            } else {
                AppError::from(err)
            }
        })?;
    if deleted {
        tracing::info!(id, "Student deleted");
        Ok(Json(Envelope::message("Student deleted successfully")))
    } else {
        Err(AppError::not_found("Student"))
    }
}
