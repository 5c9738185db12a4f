//! Route definitions for the `/records` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::record;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET    /{student_id}/records        -> list_by_student
/// POST   /{student_id}/records        -> create
/// GET    /{student_id}/records/{id}   -> get_by_id
/// PUT    /{student_id}/records/{id}   -> update
/// DELETE /{student_id}/records/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{student_id}/records",
            get(record::list_by_student).post(record::create),
        )
        .route(
            "/{student_id}/records/{id}",
            get(record::get_by_id)
                .put(record::update)
                .delete(record::delete),
        )
}
