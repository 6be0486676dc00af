use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use crate::db;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
}

// GET /health - Reports whether the store is reachable
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = match pool.acquire().await {
        Ok(mut conn) => db::ping(&mut conn).await.is_ok(),
        Err(e) => {
            tracing::warn!("Health check could not acquire a connection: {}", e);
            false
        }
    };

    let (status, label) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let response = HealthResponse {
        status: label.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
