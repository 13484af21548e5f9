//! Common test utilities and fixtures for integration tests.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use farsi_practice_backend::db::Database;
use farsi_practice_backend::{router, AppState};
use practice_core::ExampleSelector;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            selector: Arc::new(ExampleSelector::new()),
        };

        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a user with a session token, returning (user_id, token).
    ///
    /// The username is suffixed with a UUID so parallel test runs do not
    /// collide on the unique constraint.
    pub async fn create_test_user(&self, prefix: &str) -> (i64, String) {
        let username = format!("{}-{}", prefix, Uuid::new_v4());
        let email = format!("{}@example.com", username);
        let password_hash =
            bcrypt::hash("correct horse battery staple", bcrypt::DEFAULT_COST).unwrap();

        let user = self
            .db
            .create_user(&username, &email, &password_hash)
            .await
            .expect("Failed to create test user");
        let session = self
            .db
            .create_session(user.id)
            .await
            .expect("Failed to create test session");

        (user.id, session.token)
    }

    /// Format a Bearer authorization header value.
    pub fn auth_header_value(token: &str) -> axum::http::HeaderValue {
        format!("Bearer {}", token).parse().unwrap()
    }

    /// Delete a test user; sessions and practice rows cascade.
    pub async fn cleanup_user(&self, user_id: i64) {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await
            .expect("Failed to clean up test user");
    }

    /// Delete a test word; definitions and examples cascade.
    pub async fn cleanup_word(&self, word_id: i64) {
        sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(word_id)
            .execute(self.db.pool())
            .await
            .expect("Failed to clean up test word");
    }
}
