pub mod attendance;
pub mod health;
pub mod record;
pub mod student;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                   list, create
/// /students/{id}                              get, update, delete
/// /students/{id}/records                      list (?subject, category, type)
/// /students/rfid/{tag}                        lookup by badge
///
/// /records/{student_id}/records               list (?subject, category, type), create
/// /records/{student_id}/records/{id}          get, update, delete
///
/// /attendance                                 create (POST)
/// /attendance/{id}                            delete
/// /attendance/subjects                        list reference subjects
/// /attendance/students/{student_id}           list (?subjectId)
/// ```
///
/// Unmatched paths under `/api` answer with a 404 envelope instead of falling
/// through to the static front end.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", student::router())
        .nest("/records", record::router())
        .nest("/attendance", attendance::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::not_found("Route")
}
