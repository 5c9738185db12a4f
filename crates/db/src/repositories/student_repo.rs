//! Repository for the `students` table.

use eindex_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{Student, StudentFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, student_id, name, rfid_tag, course, year, section, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// Duplicate `student_id` or `rfid_tag` values fail with a unique
    /// violation on `uq_students_student_id` / `uq_students_rfid_tag`.
    pub async fn create(pool: &PgPool, input: &StudentFields) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (student_id, name, rfid_tag, course, year, section)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_id)
            .bind(&input.name)
            .bind(&input.rfid_tag)
            .bind(&input.course)
            .bind(input.year)
            .bind(&input.section)
            .fetch_one(pool)
            .await
    }

    /// Find a student by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the student carrying the given RFID badge.
    pub async fn find_by_rfid(
        pool: &PgPool,
        rfid_tag: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE rfid_tag = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(rfid_tag)
            .fetch_optional(pool)
            .await
    }

    /// List all students, most recently admitted first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id DESC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Replace every editable field of a student.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &StudentFields,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                student_id = $2,
                name = $3,
                rfid_tag = $4,
                course = $5,
                year = $6,
                section = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.student_id)
            .bind(&input.name)
            .bind(&input.rfid_tag)
            .bind(&input.course)
            .bind(input.year)
            .bind(&input.section)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while records or attendance rows
    /// still reference the student.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
