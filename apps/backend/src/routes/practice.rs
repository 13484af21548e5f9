//! Practice endpoints

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use practice_core::{save_score, similarity_score, Difficulty, ExampleDetail, ExampleStore};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// GET /api/practice/next
pub async fn next(
    State(state): State<AppState>,
    auth: Option<Extension<AuthenticatedUser>>,
    Query(query): Query<NextExampleQuery>,
) -> Result<Json<NextExampleResponse>> {
    let user_id = auth.map(|Extension(user)| user.user_id);

    let example = state
        .selector
        .next_example(state.db.as_ref(), user_id, query.difficulty)
        .await?;

    if example.is_none() {
        tracing::debug!(difficulty = %query.difficulty, "No examples at difficulty");
    }

    Ok(Json(NextExampleResponse { example }))
}

/// GET /api/practice/example/:id
pub async fn example_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExampleDetail>> {
    let detail = state
        .db
        .example_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Example {} not found", id)))?;

    Ok(Json(detail))
}

/// POST /api/practice/attempt
///
/// Scores the typed answer against the example's English reference and
/// upserts the user's practice record. An empty answer is a valid attempt
/// that simply scores 0.
pub async fn attempt(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>> {
    let detail = state
        .db
        .example_detail(payload.example_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Example {} not found", payload.example_id)))?;

    let score = similarity_score(&payload.answer, &detail.example.english);

    save_score(state.db.as_ref(), auth.user_id, payload.example_id, score).await?;

    Ok(Json(AttemptResponse {
        score,
        reference: detail.example.english,
    }))
}

/// GET /api/practice/history
pub async fn history(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<HistoryResponse>> {
    let records = state.db.practice_records(auth.user_id).await?;

    Ok(Json(HistoryResponse { records }))
}

/// GET /api/practice/difficulties
pub async fn difficulties() -> Json<DifficultiesResponse> {
    Json(DifficultiesResponse {
        difficulties: Difficulty::ALL
            .iter()
            .map(|d| DifficultyInfo {
                value: d.as_str().to_string(),
                label: d.label().to_string(),
            })
            .collect(),
    })
}
