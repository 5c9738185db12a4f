//! Repository for the `records` table.
//!
//! Academic and attendance records share the table; the write methods take a
//! [`RecordPayload`] and flatten it into nullable columns.

use eindex_core::record::RecordPayload;
use eindex_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::record::{Record, RecordFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, student_id, record_type, subject, category, record_number, items, score, date_time";

/// Column values for one payload. `date_time` is `None` when the database
/// clock should be used.
struct RecordColumns<'a> {
    record_type: &'static str,
    subject: &'a str,
    category: Option<&'a str>,
    record_number: Option<i32>,
    items: Option<i32>,
    score: Option<f64>,
    date_time: Option<Timestamp>,
}

impl<'a> From<&'a RecordPayload> for RecordColumns<'a> {
    fn from(payload: &'a RecordPayload) -> Self {
        let record_type = payload.record_type().as_str();
        match payload {
            RecordPayload::Academic(r) => Self {
                record_type,
                subject: &r.subject,
                category: Some(&r.category),
                record_number: Some(r.record_number),
                items: Some(r.items),
                score: Some(r.score),
                date_time: None,
            },
            RecordPayload::Attendance(m) => Self {
                record_type,
                subject: &m.subject,
                category: None,
                record_number: None,
                items: None,
                score: None,
                date_time: Some(m.date_time),
            },
        }
    }
}

pub struct RecordRepo;

impl RecordRepo {
    /// Insert a record for a student.
    ///
    /// Academic records are stamped with `NOW()`; attendance records keep the
    /// timestamp supplied in the payload.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        payload: &RecordPayload,
    ) -> Result<Record, sqlx::Error> {
        let cols = RecordColumns::from(payload);
        let query = format!(
            "INSERT INTO records
                (student_id, record_type, subject, category, record_number, items, score, date_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(student_id)
            .bind(cols.record_type)
            .bind(cols.subject)
            .bind(cols.category)
            .bind(cols.record_number)
            .bind(cols.items)
            .bind(cols.score)
            .bind(cols.date_time)
            .fetch_one(pool)
            .await
    }

    /// Find one of a student's records by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        student_id: DbId,
        id: DbId,
    ) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = $1 AND student_id = $2");
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    /// List a student's records, newest first.
    ///
    /// Ties on `date_time` fall back to the higher ID so the order is stable.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
        filter: &RecordFilter,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM records
             WHERE student_id = $1
               AND ($2::TEXT IS NULL OR subject = $2)
               AND ($3::TEXT IS NULL OR category = $3)
               AND ($4::TEXT IS NULL OR record_type = $4)
             ORDER BY date_time DESC, id DESC"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(student_id)
            .bind(filter.subject.as_deref())
            .bind(filter.category.as_deref())
            .bind(filter.record_type.map(|t| t.as_str()))
            .fetch_all(pool)
            .await
    }

    /// Overwrite a record with a new payload.
    ///
    /// Academic records are re-stamped with `NOW()`. Returns `None` if the
    /// student has no record with the given `id`.
    pub async fn update(
        pool: &PgPool,
        student_id: DbId,
        id: DbId,
        payload: &RecordPayload,
    ) -> Result<Option<Record>, sqlx::Error> {
        let cols = RecordColumns::from(payload);
        let query = format!(
            "UPDATE records SET
                record_type = $3,
                subject = $4,
                category = $5,
                record_number = $6,
                items = $7,
                score = $8,
                date_time = COALESCE($9, NOW())
             WHERE id = $1 AND student_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(student_id)
            .bind(cols.record_type)
            .bind(cols.subject)
            .bind(cols.category)
            .bind(cols.record_number)
            .bind(cols.items)
            .bind(cols.score)
            .bind(cols.date_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of a student's records. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, student_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1 AND student_id = $2")
            .bind(id)
            .bind(student_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
