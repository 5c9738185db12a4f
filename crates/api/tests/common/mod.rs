#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use eindex_api::app::build_app;
use eindex_api::config::ServerConfig;
use eindex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from("does-not-exist"),
        db_max_connections: 5,
    }
}

/// Build the full application router with the same middleware stack
/// production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(config),
    })
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Admission payload used across tests.
pub fn student_json(student_id: &str, rfid_tag: &str) -> serde_json::Value {
    serde_json::json!({
        "student_id": student_id,
        "name": "A",
        "rfid_tag": rfid_tag,
        "course": "BSIT",
        "year": 1,
        "section": "A"
    })
}

/// Create a student through the API and return its internal id.
pub async fn create_student(pool: &PgPool, student_id: &str, rfid_tag: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/students",
        student_json(student_id, rfid_tag),
    )
    .await;
    let json = body_json(response).await;
    json["studentId"].as_i64().expect("created student id")
}

/// Subjects are reference data with no API to create them.
pub async fn insert_subject(pool: &PgPool, code: &str, teacher: &str) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO subjects (code, teacher) VALUES ($1, $2) RETURNING id")
            .bind(code)
            .bind(teacher)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}
