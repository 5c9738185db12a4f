use eindex_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `subjects` reference table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub code: String,
    pub teacher: String,
}
