//! Repository for the `attendance` table (RFID scan events).

use eindex_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendance::{Attendance, AttendanceWithSubject, NewAttendance};

/// Scan events are append-only: there is no update, only create and delete.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Record a scan. `date_time` is the database clock at insert time.
    pub async fn create(pool: &PgPool, input: &NewAttendance) -> Result<Attendance, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (student_id, subject_id, date_time)
             VALUES ($1, $2, NOW())
             RETURNING id, student_id, subject_id, date_time",
        )
        .bind(input.student_id)
        .bind(input.subject_id)
        .fetch_one(pool)
        .await
    }

    /// List a student's attendance joined with subject code and teacher,
    /// newest first, optionally restricted to one subject.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
        subject_id: Option<DbId>,
    ) -> Result<Vec<AttendanceWithSubject>, sqlx::Error> {
        sqlx::query_as::<_, AttendanceWithSubject>(
            "SELECT a.id, a.student_id, a.subject_id, a.date_time,
                    s.code AS subject_code, s.teacher
             FROM attendance a
             JOIN subjects s ON a.subject_id = s.id
             WHERE a.student_id = $1
               AND ($2::BIGINT IS NULL OR a.subject_id = $2)
             ORDER BY a.date_time DESC, a.id DESC",
        )
        .bind(student_id)
        .bind(subject_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a scan by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
