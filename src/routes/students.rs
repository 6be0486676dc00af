use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Student, StudentPayload};

const NOT_FOUND: &str = "Not Found";

// GET /students - List all students
pub async fn get_students(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Student>>, ApiError> {
    tracing::info!("GET: Retrieving all students");

    let mut conn = pool.acquire().await?;
    let students = db::list_students(&mut conn).await?;

    Ok(Json(students))
}

// GET /students/{id} - Get student by ID
pub async fn get_student_by_id(
    State(pool): State<SqlitePool>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    tracing::info!("GET: Retrieving student {}", student_id);

    let mut conn = pool.acquire().await?;
    let student = db::get_student(&mut conn, student_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(student))
}

// POST /students - Create a student; the store assigns the id
pub async fn create_student(
    State(pool): State<SqlitePool>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    tracing::info!("POST: Creating a new student");

    let Json(payload) = payload?;
    let mut conn = pool.acquire().await?;
    let student = db::insert_student(&mut conn, &payload).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

// PUT /students/{id} - Overwrite first name, last name and school
pub async fn update_student(
    State(pool): State<SqlitePool>,
    Path(student_id): Path<i64>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    tracing::info!("PUT: Updating student {}", student_id);

    let mut conn = pool.acquire().await?;

    // Missing rows win over malformed bodies
    db::get_student(&mut conn, student_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    let Json(payload) = payload?;
    let student = db::update_student(&mut conn, student_id, &payload)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(student))
}

// DELETE /students/{id} - Remove a student and echo its last values
pub async fn delete_student(
    State(pool): State<SqlitePool>,
    Path(student_id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    tracing::info!("DELETE: Removing student {}", student_id);

    let mut conn = pool.acquire().await?;
    let student = db::delete_student(&mut conn, student_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(student))
}
