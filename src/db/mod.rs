//! Store queries. Each function runs against a connection the caller has
//! checked out of the pool for the current request.

use sqlx::SqliteConnection;
use crate::models::*;

// Student queries
pub async fn list_students(conn: &mut SqliteConnection) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"SELECT student_id, last_name, first_name, school FROM Students"#
    )
    .fetch_all(conn)
    .await
}

pub async fn get_student(conn: &mut SqliteConnection, student_id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"SELECT student_id, last_name, first_name, school FROM Students WHERE student_id = ?"#
    )
    .bind(student_id)
    .fetch_optional(conn)
    .await
}

pub async fn insert_student(conn: &mut SqliteConnection, student: &StudentPayload) -> Result<Student, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"INSERT INTO Students (last_name, first_name, school)
           VALUES (?, ?, ?)
           RETURNING student_id, last_name, first_name, school"#
    )
    .bind(&student.last_name)
    .bind(&student.first_name)
    .bind(&student.school)
    .fetch_one(conn)
    .await
}

/// Overwrite the name and school of a student. Returns `None` if the row is gone.
pub async fn update_student(
    conn: &mut SqliteConnection,
    student_id: i64,
    student: &StudentPayload,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"UPDATE Students
           SET first_name = ?, last_name = ?, school = ?
           WHERE student_id = ?
           RETURNING student_id, last_name, first_name, school"#
    )
    .bind(&student.first_name)
    .bind(&student.last_name)
    .bind(&student.school)
    .bind(student_id)
    .fetch_optional(conn)
    .await
}

/// Remove a student, returning the row as it was before deletion
pub async fn delete_student(conn: &mut SqliteConnection, student_id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"DELETE FROM Students WHERE student_id = ?
           RETURNING student_id, last_name, first_name, school"#
    )
    .bind(student_id)
    .fetch_optional(conn)
    .await
}

// Game queries
pub async fn list_games(conn: &mut SqliteConnection) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT id, year, gender, city, country, continent, winner, created FROM Games"#
    )
    .fetch_all(conn)
    .await
}

pub async fn get_game(conn: &mut SqliteConnection, game_id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT id, year, gender, city, country, continent, winner, created
           FROM Games WHERE id = ?"#
    )
    .bind(game_id)
    .fetch_optional(conn)
    .await
}

pub async fn insert_game(conn: &mut SqliteConnection, game: &GamePayload) -> Result<Game, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"INSERT INTO Games (year, gender, city, country, continent, winner, created)
           VALUES (?, ?, ?, ?, ?, ?, ?)
           RETURNING id, year, gender, city, country, continent, winner, created"#
    )
    .bind(game.year)
    .bind(&game.gender)
    .bind(&game.city)
    .bind(&game.country)
    .bind(&game.continent)
    .bind(&game.winner)
    .bind(game.created)
    .fetch_one(conn)
    .await
}

/// Replace every non-key column of a game
pub async fn update_game(
    conn: &mut SqliteConnection,
    game_id: i64,
    game: &GamePayload,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"UPDATE Games
           SET year = ?, gender = ?, city = ?, country = ?, continent = ?, winner = ?, created = ?
           WHERE id = ?
           RETURNING id, year, gender, city, country, continent, winner, created"#
    )
    .bind(game.year)
    .bind(&game.gender)
    .bind(&game.city)
    .bind(&game.country)
    .bind(&game.continent)
    .bind(&game.winner)
    .bind(game.created)
    .bind(game_id)
    .fetch_optional(conn)
    .await
}

pub async fn delete_game(conn: &mut SqliteConnection, game_id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"DELETE FROM Games WHERE id = ?
           RETURNING id, year, gender, city, country, continent, winner, created"#
    )
    .bind(game_id)
    .fetch_optional(conn)
    .await
}

/// Cheap round trip used by the health check
pub async fn ping(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}
