//! Route definitions for the `/attendance` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// POST   /                          -> create
/// DELETE /{id}                      -> delete
/// GET    /subjects                  -> list_subjects
/// GET    /students/{student_id}     -> list_by_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(attendance::create))
        .route("/{id}", delete(attendance::delete))
        .route("/subjects", get(attendance::list_subjects))
        .route("/students/{student_id}", get(attendance::list_by_student))
}
