use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eindex_core::error::CoreError;
use serde_json::json;
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ success: false, message, code }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eindex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that has no domain meaning.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::Core(CoreError::NotFound { entity })
    }
}

/// Constraint violations become domain errors; everything else stays a
/// database error.
///
/// - Unique violations become [`CoreError::Conflict`] naming the field.
/// - Foreign key violations on insert become [`CoreError::NotFound`] for the
///   missing parent. Deletes that would orphan rows are mapped by the
///   handler that issues them.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    let message = duplicate_message(db_err.constraint());
                    return Self::Core(CoreError::Conflict(message.to_string()));
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::not_found(missing_parent(db_err.constraint()));
                }
                _ => {}
            }
        }
        Self::Database(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "success": false,
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Check violations (23514) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::CheckViolation) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!(
                "Value violates constraint: {}",
                db_err.constraint().unwrap_or("unknown")
            ),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Human-readable message for a unique constraint, keyed by constraint name.
fn duplicate_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("uq_students_rfid_tag") => "RFID tag already exists",
        Some("uq_students_student_id") => "Student ID already exists",
        Some("uq_subjects_code") => "Subject code already exists",
        _ => "Record already exists",
    }
}

/// Parent entity an inserted row points at, keyed by foreign key name.
fn missing_parent(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("fk_attendance_subject_id") => "Subject",
        _ => "Student",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_messages_name_the_colliding_field() {
        assert_eq!(
            duplicate_message(Some("uq_students_rfid_tag")),
            "RFID tag already exists"
        );
        assert_eq!(
            duplicate_message(Some("uq_students_student_id")),
            "Student ID already exists"
        );
        assert_eq!(duplicate_message(None), "Record already exists");
    }

    #[test]
    fn missing_parent_follows_foreign_key_name() {
        assert_eq!(missing_parent(Some("fk_attendance_subject_id")), "Subject");
        assert_eq!(missing_parent(Some("fk_attendance_student_id")), "Student");
        assert_eq!(missing_parent(Some("fk_records_student_id")), "Student");
    }
}
