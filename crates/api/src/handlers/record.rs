//! Handlers for `/api/records/{student_id}/records`.
//!
//! The body's `record_type` selects academic or attendance validation; see
//! [`RecordInput::into_payload`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use eindex_core::record::RecordType;
use eindex_core::types::DbId;
use eindex_db::models::record::{Record, RecordInput};
use eindex_db::repositories::RecordRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::RecordListParams;
use crate::response::{Envelope, NoPayload};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecordList {
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct RecordBody {
    pub record: Record,
}

#[derive(Debug, Serialize)]
pub struct CreatedRecord {
    #[serde(rename = "recordId")]
    pub id: DbId,
    pub record: Record,
}

/// GET /api/records/{student_id}/records
pub async fn list_by_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<DbId>,
    AppQuery(params): AppQuery<RecordListParams>,
) -> AppResult<Json<Envelope<RecordList>>> {
    let filter = params.into_filter()?;
    tracing::debug!(student_id, ?filter, "Listing records");
    let records = RecordRepo::list_by_student(&state.pool, student_id, &filter).await?;
    Ok(Json(Envelope::ok(RecordList { records })))
}

/// GET /api/records/{student_id}/records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((student_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<Envelope<RecordBody>>> {
    let record = RecordRepo::find_by_id(&state.pool, student_id, id)
        .await?
        .ok_or(AppError::not_found("Record"))?;
    Ok(Json(Envelope::ok(RecordBody { record })))
}

/// POST /api/records/{student_id}/records
pub async fn create(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<DbId>,
    AppJson(input): AppJson<RecordInput>,
) -> AppResult<(StatusCode, Json<Envelope<CreatedRecord>>)> {
    let payload = input.into_payload()?;
    let record_type = payload.record_type();
    let record = RecordRepo::create(&state.pool, student_id, &payload).await?;
    tracing::info!(id = record.id, student_id, %record_type, "Record created");

    let message = match record_type {
        RecordType::Academic => "Academic record created successfully",
        RecordType::Attendance => "Attendance record created successfully",
    };
    let body = Envelope::ok(CreatedRecord {
        id: record.id,
        record,
    })
    .with_message(message);
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /api/records/{student_id}/records/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath((student_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<RecordInput>,
) -> AppResult<Json<Envelope<RecordBody>>> {
    let payload = input.into_payload()?;
    let record = RecordRepo::update(&state.pool, student_id, id, &payload)
        .await?
        .ok_or(AppError::not_found("Record"))?;
    Ok(Json(
        Envelope::ok(RecordBody { record }).with_message("Record updated successfully"),
    ))
}

/// DELETE /api/records/{student_id}/records/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((student_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<Envelope<NoPayload>>> {
    if RecordRepo::delete(&state.pool, student_id, id).await? {
        tracing::info!(id, student_id, "Record deleted");
        Ok(Json(Envelope::message("Record deleted successfully")))
    } else {
        Err(AppError::not_found("Record"))
    }
}
