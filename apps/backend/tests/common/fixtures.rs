//! Seed helpers for vocabulary test data.

use farsi_practice_backend::db::Database;

/// Insert a word at the given difficulty, returning its id.
pub async fn seed_word(db: &Database, difficulty: &str, word: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO words (word, part_of_speech, difficulty, pronunciation)
        VALUES ($1, 'noun', $2, $3)
        RETURNING id
        "#,
    )
    .bind(word)
    .bind(difficulty)
    .bind(format!("/{}/", word))
    .fetch_one(db.pool())
    .await
    .expect("Failed to seed word")
}

/// Insert a definition for a word, returning its id.
pub async fn seed_definition(db: &Database, word_id: i64, definition: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO definitions (word_id, definition)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(word_id)
    .bind(definition)
    .fetch_one(db.pool())
    .await
    .expect("Failed to seed definition")
}

/// Insert an example sentence pair, returning its id.
pub async fn seed_example(db: &Database, definition_id: i64, english: &str, persian: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO examples (definition_id, english, persian)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(definition_id)
    .bind(english)
    .bind(persian)
    .fetch_one(db.pool())
    .await
    .expect("Failed to seed example")
}

/// Seed a full word -> definition -> example chain.
///
/// Returns (word_id, example_id); cleaning up the word cascades to the rest.
pub async fn seed_example_chain(
    db: &Database,
    difficulty: &str,
    word: &str,
    english: &str,
    persian: &str,
) -> (i64, i64) {
    let word_id = seed_word(db, difficulty, word).await;
    let definition_id = seed_definition(db, word_id, "a test definition").await;
    let example_id = seed_example(db, definition_id, english, persian).await;
    (word_id, example_id)
}
