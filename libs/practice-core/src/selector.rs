//! Next-example selection with tiered fallback.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use rand::seq::SliceRandom;

use crate::error::Result;
use crate::store::ExampleStore;
use crate::types::{Difficulty, Example, ExampleId, UserId};

/// Picks the next practice example for a user.
///
/// Candidate tiers are tried in strict priority order:
/// 1. examples the user previously scored below 100 on (spaced repetition)
/// 2. examples the user has never attempted
/// 3. any example at the requested difficulty
/// 4. the single remaining example, even if it was just shown
///
/// Each tier excludes the last example shown to that user, tracked in an
/// in-memory cursor. The cursor is intentionally not persisted: losing it on
/// restart only weakens the anti-repeat heuristic, never scoring.
pub struct ExampleSelector {
    last_shown: Mutex<HashMap<UserId, ExampleId>>,
}

impl ExampleSelector {
    pub fn new() -> Self {
        Self {
            last_shown: Mutex::new(HashMap::new()),
        }
    }

    /// Last example id recorded for a user, if any.
    pub fn last_shown(&self, user_id: UserId) -> Option<ExampleId> {
        self.cursors().get(&user_id).copied()
    }

    /// Pick the next example at the given difficulty.
    ///
    /// Returns `Ok(None)` only when no example exists at the tier at all.
    /// Anonymous callers get tier 3 directly and leave no cursor behind.
    pub async fn next_example<S>(
        &self,
        store: &S,
        user_id: Option<UserId>,
        difficulty: Difficulty,
    ) -> Result<Option<Example>>
    where
        S: ExampleStore + ?Sized,
    {
        let examples = store.examples_by_difficulty(difficulty).await?;
        if examples.is_empty() {
            return Ok(None);
        }

        let last = user_id.and_then(|id| self.last_shown(id));

        let mut chosen = None;

        if let Some(uid) = user_id {
            let records = store.practice_records(uid).await?;
            let scores: HashMap<ExampleId, u8> =
                records.iter().map(|r| (r.example_id, r.score)).collect();

            let retry: Vec<&Example> = examples
                .iter()
                .filter(|e| Some(e.id) != last)
                .filter(|e| scores.get(&e.id).is_some_and(|s| *s < 100))
                .collect();
            chosen = pick(&retry);

            if chosen.is_none() {
                let practiced: HashSet<ExampleId> =
                    store.practiced_example_ids(uid).await?.into_iter().collect();
                let fresh: Vec<&Example> = examples
                    .iter()
                    .filter(|e| Some(e.id) != last)
                    .filter(|e| !practiced.contains(&e.id))
                    .collect();
                chosen = pick(&fresh);
            }
        }

        if chosen.is_none() {
            let rest: Vec<&Example> = examples.iter().filter(|e| Some(e.id) != last).collect();
            chosen = pick(&rest);
        }

        if chosen.is_none() {
            // Everything at this tier equals the last example shown, so the
            // no-repeat rule yields: repeat it rather than return nothing.
            chosen = examples.choose(&mut rand::thread_rng()).cloned();
        }

        if let (Some(uid), Some(example)) = (user_id, &chosen) {
            self.cursors().insert(uid, example.id);
        }

        Ok(chosen)
    }

    fn cursors(&self) -> std::sync::MutexGuard<'_, HashMap<UserId, ExampleId>> {
        self.last_shown.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ExampleSelector {
    fn default() -> Self {
        Self::new()
    }
}

// ThreadRng is a cheap handle, so each tier grabs its own; nothing random is
// ever held across an await.
fn pick(candidates: &[&Example]) -> Option<Example> {
    candidates.choose(&mut rand::thread_rng()).map(|e| (*e).clone())
}
