//! Data-access seam consumed by the selector and recorder.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Difficulty, Example, ExampleDetail, ExampleId, PracticeRecord, UserId};

/// Asynchronous access to the example and practice tables.
///
/// The backend implements this over its database; the core depends only on
/// the trait so the algorithms stay testable against in-memory fakes. Every
/// operation may fail with a transport or query error, which the core
/// propagates without retrying.
#[async_trait]
pub trait ExampleStore: Send + Sync {
    /// All examples whose owning word sits at the given difficulty tier.
    async fn examples_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Example>>;

    /// One example joined with its word hint material, if it exists.
    async fn example_detail(&self, example_id: ExampleId) -> Result<Option<ExampleDetail>>;

    /// All practice records for a user.
    async fn practice_records(&self, user_id: UserId) -> Result<Vec<PracticeRecord>>;

    /// Ids of every example the user has attempted at least once.
    async fn practiced_example_ids(&self, user_id: UserId) -> Result<Vec<ExampleId>>;

    /// Insert or overwrite the score for a (user, example) pair.
    async fn upsert_score(&self, user_id: UserId, example_id: ExampleId, score: u8) -> Result<()>;
}
