#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

/// Fresh in-memory database with the expected tables.
pub async fn test_pool() -> SqlitePool {
    // A single connection keeps every request on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::raw_sql(include_str!("../../schema.sql"))
        .execute(&pool)
        .await
        .expect("Failed to create tables");

    pool
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    school_api::app(test_pool().await)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body should be JSON")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8"),
    }
}
