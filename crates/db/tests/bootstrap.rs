use sqlx::PgPool;

/// Connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    eindex_db::health_check(&pool).await.unwrap();

    for table in ["students", "subjects", "records", "attendance"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The academic check constraint backs up handler validation.
#[sqlx::test(migrations = "./migrations")]
async fn test_score_above_items_violates_check(pool: PgPool) {
    let (student_id,): (i64,) = sqlx::query_as(
        "INSERT INTO students (student_id, name, rfid_tag, course, year, section)
         VALUES ('21-0001', 'A', '1234567890', 'BSIT', 1, 'A') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let err = sqlx::query(
        "INSERT INTO records (student_id, record_type, subject, category, record_number, items, score)
         VALUES ($1, 'academic', 'IT223', 'quiz', 1, 10, 12)",
    )
    .bind(student_id)
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
    assert_eq!(db_err.constraint(), Some("ck_records_academic_fields"));
}
