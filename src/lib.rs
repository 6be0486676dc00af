//! HTTP CRUD service for students and games backed by SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;

/// Build the full router with every endpoint wired to `pool`.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::welcome::welcome).post(routes::welcome::welcome))
        .route("/health", get(routes::health::health_check))

        // Student endpoints
        .route(
            "/students",
            get(routes::students::get_students).post(routes::students::create_student),
        )
        .route(
            "/students/{id}",
            get(routes::students::get_student_by_id)
                .put(routes::students::update_student)
                .delete(routes::students::delete_student),
        )

        // Game endpoints
        .route(
            "/games",
            get(routes::games::get_games).post(routes::games::create_game),
        )
        .route(
            "/games/{id}",
            get(routes::games::get_game_by_id)
                .put(routes::games::update_game)
                .delete(routes::games::delete_game),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
