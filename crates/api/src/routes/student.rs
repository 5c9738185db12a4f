//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/records     -> list_records
/// GET    /rfid/{tag}       -> find_by_rfid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route("/rfid/{tag}", get(student::find_by_rfid))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
        .route("/{id}/records", get(student::list_records))
}
