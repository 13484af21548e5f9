//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from practice-core
pub use practice_core::{Difficulty, Example, ExampleDetail, PracticeRecord};

// === Database Entity Types ===
//
// Words and definitions are only ever read through the example joins, so
// they have no standalone row types here.

/// Example sentence row; one definition has many examples
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbExample {
    pub id: i64,
    pub definition_id: i64,
    pub english: String,
    pub persian: String,
}

impl DbExample {
    /// Convert to the core example type
    pub fn to_core(&self) -> Example {
        Example {
            id: self.id,
            definition_id: self.definition_id,
            english: self.english.clone(),
            persian: self.persian.clone(),
        }
    }
}

/// Example joined with its definition and word hint material
#[derive(Debug, Clone, FromRow)]
pub struct DbExampleDetail {
    pub id: i64,
    pub definition_id: i64,
    pub english: String,
    pub persian: String,
    pub definition: String,
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
}

impl DbExampleDetail {
    pub fn to_core(&self) -> ExampleDetail {
        ExampleDetail {
            example: Example {
                id: self.id,
                definition_id: self.definition_id,
                english: self.english.clone(),
                persian: self.persian.clone(),
            },
            definition: self.definition.clone(),
            word: self.word.clone(),
            pronunciation: self.pronunciation.clone(),
            part_of_speech: self.part_of_speech.clone(),
        }
    }
}

/// User account row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Login session row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Practice score row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPractice {
    pub id: i64,
    pub user_id: i64,
    pub example_id: i64,
    pub score: i16,
    pub updated_at: DateTime<Utc>,
}

impl DbPractice {
    /// Convert to the core record type
    pub fn to_core(&self) -> PracticeRecord {
        PracticeRecord {
            user_id: self.user_id,
            example_id: self.example_id,
            score: self.score.clamp(0, 100) as u8,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email address
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct NextExampleQuery {
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct NextExampleResponse {
    /// `null` when no example exists at the requested difficulty
    pub example: Option<Example>,
}

#[derive(Debug, Deserialize)]
pub struct AttemptRequest {
    pub example_id: i64,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    pub score: u8,
    /// The English reference the answer was scored against
    pub reference: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<PracticeRecord>,
}

#[derive(Debug, Serialize)]
pub struct DifficultyInfo {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct DifficultiesResponse {
    pub difficulties: Vec<DifficultyInfo>,
}
