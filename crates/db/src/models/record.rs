//! Record entity model and list filters.

use eindex_core::record::RecordType;
use eindex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eindex_core::record::{RecordInput, RecordPayload};

/// A row from the `records` table.
///
/// Academic rows carry `category`, `record_number`, `items` and `score`;
/// attendance rows leave them `NULL`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Record {
    pub id: DbId,
    pub student_id: DbId,
    #[sqlx(try_from = "String")]
    pub record_type: RecordType,
    pub subject: String,
    pub category: Option<String>,
    pub record_number: Option<i32>,
    pub items: Option<i32>,
    pub score: Option<f64>,
    pub date_time: Timestamp,
}

/// Optional equality filters for listing a student's records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub subject: Option<String>,
    pub category: Option<String>,
    pub record_type: Option<RecordType>,
}
