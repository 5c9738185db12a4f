//! Repository for the `subjects` reference table.

use sqlx::PgPool;

use crate::models::subject::Subject;

pub struct SubjectRepo;

impl SubjectRepo {
    /// List every subject ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        sqlx::query_as::<_, Subject>("SELECT id, code, teacher FROM subjects ORDER BY code")
            .fetch_all(pool)
            .await
    }
}
