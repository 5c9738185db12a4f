//! HTTP-level integration tests for `/api/records/{student_id}/records`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_student, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn quiz(subject: &str, number: i64, items: i64, score: serde_json::Value) -> serde_json::Value {
    json!({
        "subject": subject,
        "category": "quiz",
        "record_number": number,
        "items": items,
        "score": score
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_academic_record(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/records/{student}/records"),
        quiz("IT223", 1, 10, json!(8)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Academic record created successfully");
    assert!(json["recordId"].as_i64().is_some());
    let record = &json["record"];
    assert_eq!(record["record_type"], "academic");
    assert_eq!(record["student_id"], student);
    assert_eq!(record["items"], 10);
    assert_eq!(record["score"], 8.0);
    assert!(record["date_time"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_score_above_items_is_rejected(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/records/{student}/records"),
        quiz("IT223", 1, 10, json!(12)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Score must be between 0 and 10");

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/records/{student}/records"),
        )
        .await,
    )
    .await;
    assert_eq!(json["records"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_attendance_record_uses_given_date_and_time(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/records/{student}/records"),
        json!({
            "record_type": "attendance",
            "subject": "IT223",
            "date": "2024-03-05",
            "time": "08:30"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Attendance record created successfully");
    let record = &json["record"];
    assert_eq!(record["record_type"], "attendance");
    assert!(record["category"].is_null());
    assert!(record["score"].is_null());
    assert!(record["date_time"]
        .as_str()
        .unwrap()
        .starts_with("2024-03-05T08:30:00"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_record_for_unknown_student_is_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/records/999999/records",
        quiz("IT223", 1, 10, json!(5)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Student not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_and_ordering(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;
    let uri = format!("/api/records/{student}/records");

    post_json(common::build_test_app(pool.clone()), &uri, quiz("IT223", 1, 10, json!(7))).await;
    post_json(common::build_test_app(pool.clone()), &uri, quiz("IT224", 1, 20, json!(15))).await;
    post_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({
            "record_type": "attendance",
            "subject": "IT223",
            "date": "2020-01-01",
            "time": "07:00"
        }),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    // Newest first; the back-dated attendance mark sorts last.
    assert_eq!(records[0]["subject"], "IT224");
    assert_eq!(records[2]["record_type"], "attendance");

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("{uri}?subject=IT223"),
        )
        .await,
    )
    .await;
    assert_eq!(json["records"].as_array().unwrap().len(), 2);

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("{uri}?subject=IT223&category=quiz"),
        )
        .await,
    )
    .await;
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["score"], 7.0);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("{uri}?type=attendance"),
        )
        .await,
    )
    .await;
    assert_eq!(json["records"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_update_delete_record(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;
    let uri = format!("/api/records/{student}/records");
    let created = body_json(
        post_json(common::build_test_app(pool.clone()), &uri, quiz("IT223", 1, 10, json!(4))).await,
    )
    .await;
    let id = created["recordId"].as_i64().unwrap();
    let record_uri = format!("{uri}/{id}");

    let json = body_json(get(common::build_test_app(pool.clone()), &record_uri).await).await;
    assert_eq!(json["record"]["score"], 4.0);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &record_uri,
        quiz("IT223", 2, 15, json!(14)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Record updated successfully");
    assert_eq!(json["record"]["record_number"], 2);
    assert_eq!(json["record"]["items"], 15);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &record_uri,
        quiz("IT223", 2, 15, json!(16)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete(common::build_test_app(pool.clone()), &record_uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Record deleted successfully");

    let response = get(common::build_test_app(pool.clone()), &record_uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Record not found");

    let response = delete(common::build_test_app(pool), &record_uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_record_is_scoped_to_owning_student(pool: PgPool) {
    let owner = create_student(&pool, "21-0001", "1111111111").await;
    let other = create_student(&pool, "21-0002", "2222222222").await;
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/records/{owner}/records"),
            quiz("IT223", 1, 10, json!(4)),
        )
        .await,
    )
    .await;
    let id = created["recordId"].as_i64().unwrap();

    let foreign_uri = format!("/api/records/{other}/records/{id}");
    let response = get(common::build_test_app(pool.clone()), &foreign_uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete(common::build_test_app(pool.clone()), &foreign_uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/records/{owner}/records/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_path_is_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/records/abc/records").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_attendance_record_keeps_given_date_and_time(pool: PgPool) {
    let student = create_student(&pool, "21-0001", "1234567890").await;
    let uri = format!("/api/records/{student}/records");
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            &uri,
            json!({
                "record_type": "attendance",
                "subject": "IT223",
                "date": "2024-03-05",
                "time": "08:30"
            }),
        )
        .await,
    )
    .await;
    let record_uri = format!("{uri}/{}", created["recordId"].as_i64().unwrap());

    let response = put_json(
        common::build_test_app(pool.clone()),
        &record_uri,
        json!({
            "record_type": "attendance",
            "subject": "IT224",
            "date": "2021-05-06",
            "time": "07:15"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["record"]["subject"], "IT224");
    assert_eq!(json["record"]["date_time"], "2021-05-06T07:15:00Z");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &record_uri,
        json!({
            "record_type": "attendance",
            "subject": "IT224",
            "date": "2021-05-06",
            "time": "7pm"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid date or time format");

    // The rejected update left the stored row alone.
    let json = body_json(get(common::build_test_app(pool), &record_uri).await).await;
    assert_eq!(json["record"]["date_time"], "2021-05-06T07:15:00Z");
}
