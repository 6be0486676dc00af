use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// Row from the Students table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub school: String,
}

/// Request body for creating or updating a student.
/// A `studentId` sent by the client is ignored; the store assigns keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub last_name: String,
    pub first_name: String,
    pub school: String,
}

/// Row from the Games table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub year: i64,
    pub gender: String,
    pub city: String,
    pub country: String,
    pub continent: String,
    pub winner: String,
    pub created: DateTime<Utc>,
}

/// Request body for creating or replacing a game (every field but `id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    pub year: i64,
    pub gender: String,
    pub city: String,
    pub country: String,
    pub continent: String,
    pub winner: String,
    pub created: DateTime<Utc>,
}
