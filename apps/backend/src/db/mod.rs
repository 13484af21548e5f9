//! PostgreSQL database operations

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use practice_core::{
    Difficulty, Example, ExampleDetail, ExampleId, ExampleStore, PracticeRecord, StoreError,
    UserId,
};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Create a new user account
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by username or email
    pub async fn get_user_by_login(&self, login: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1 OR email = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Issue a new session token for a user
    pub async fn create_session(&self, user_id: i64) -> Result<Session> {
        let token = Uuid::new_v4().to_string();
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id)
            VALUES ($1, $2)
            RETURNING token, user_id, created_at
            "#,
        )
        .bind(&token)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Get session by token
    pub async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT token, user_id, created_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl ExampleStore for Database {
    async fn examples_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> std::result::Result<Vec<Example>, StoreError> {
        let rows = sqlx::query_as::<_, DbExample>(
            r#"
            SELECT e.id, e.definition_id, e.english, e.persian
            FROM examples e
            JOIN definitions d ON e.definition_id = d.id
            JOIN words w ON d.word_id = w.id
            WHERE w.difficulty = $1
            ORDER BY e.id
            "#,
        )
        .bind(difficulty.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.iter().map(DbExample::to_core).collect())
    }

    async fn example_detail(
        &self,
        example_id: ExampleId,
    ) -> std::result::Result<Option<ExampleDetail>, StoreError> {
        let row = sqlx::query_as::<_, DbExampleDetail>(
            r#"
            SELECT e.id, e.definition_id, e.english, e.persian,
                   d.definition, w.word, w.pronunciation, w.part_of_speech
            FROM examples e
            JOIN definitions d ON e.definition_id = d.id
            JOIN words w ON d.word_id = w.id
            WHERE e.id = $1
            "#,
        )
        .bind(example_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|r| r.to_core()))
    }

    async fn practice_records(
        &self,
        user_id: UserId,
    ) -> std::result::Result<Vec<PracticeRecord>, StoreError> {
        let rows = sqlx::query_as::<_, DbPractice>(
            r#"
            SELECT id, user_id, example_id, score, updated_at
            FROM practice
            WHERE user_id = $1
            ORDER BY example_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.iter().map(DbPractice::to_core).collect())
    }

    async fn practiced_example_ids(
        &self,
        user_id: UserId,
    ) -> std::result::Result<Vec<ExampleId>, StoreError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT example_id
            FROM practice
            WHERE user_id = $1
            ORDER BY example_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(ids)
    }

    async fn upsert_score(
        &self,
        user_id: UserId,
        example_id: ExampleId,
        score: u8,
    ) -> std::result::Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO practice (user_id, example_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, example_id) DO UPDATE SET
                score = EXCLUDED.score,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(example_id)
        .bind(score as i16)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }
}
