use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Game, GamePayload};

const NOT_FOUND: &str = "Game not found";

// GET /games - List all games
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Game>>, ApiError> {
    tracing::info!("GET: Retrieving all games");

    let mut conn = pool.acquire().await?;
    let games = db::list_games(&mut conn).await?;

    Ok(Json(games))
}

// GET /games/{id} - Get game by ID
pub async fn get_game_by_id(
    State(pool): State<SqlitePool>,
    Path(game_id): Path<i64>,
) -> Result<Json<Game>, ApiError> {
    tracing::info!("GET: Retrieving game {}", game_id);

    let mut conn = pool.acquire().await?;
    let game = db::get_game(&mut conn, game_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(game))
}

// POST /games - Create a game
pub async fn create_game(
    State(pool): State<SqlitePool>,
    payload: Result<Json<GamePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    tracing::info!("POST: Creating a new game");

    let Json(payload) = payload?;
    let mut conn = pool.acquire().await?;
    let game = db::insert_game(&mut conn, &payload).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

// PUT /games/{id} - Replace every non-key field of a game
pub async fn update_game(
    State(pool): State<SqlitePool>,
    Path(game_id): Path<i64>,
    payload: Result<Json<GamePayload>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    tracing::info!("PUT: Updating game {}", game_id);

    let mut conn = pool.acquire().await?;

    db::get_game(&mut conn, game_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    let Json(payload) = payload?;
    let game = db::update_game(&mut conn, game_id, &payload)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(game))
}

// DELETE /games/{id} - Remove a game
pub async fn delete_game(
    State(pool): State<SqlitePool>,
    Path(game_id): Path<i64>,
) -> Result<Json<Game>, ApiError> {
    tracing::info!("DELETE: Removing game {}", game_id);

    let mut conn = pool.acquire().await?;
    let game = db::delete_game(&mut conn, game_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(game))
}
