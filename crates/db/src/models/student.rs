//! Student entity model.

use eindex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eindex_core::student::{StudentFields, StudentInput};

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    /// School-issued number, `NN-NNNN`.
    pub student_id: String,
    pub name: String,
    pub rfid_tag: String,
    pub course: String,
    pub year: i32,
    pub section: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
