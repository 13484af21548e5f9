//! Persisting practice scores.

use crate::error::Result;
use crate::store::ExampleStore;
use crate::types::{ExampleId, UserId};

/// Save the score for one attempt, overwriting any previous attempt for the
/// same (user, example) pair.
///
/// Scores above 100 are clamped before persisting. The result tells the
/// caller whether the record was actually written; failed saves are never
/// swallowed and never retried here.
pub async fn save_score<S>(
    store: &S,
    user_id: UserId,
    example_id: ExampleId,
    score: u8,
) -> Result<()>
where
    S: ExampleStore + ?Sized,
{
    store.upsert_score(user_id, example_id, score.min(100)).await
}
