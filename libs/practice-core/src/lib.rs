//! Core library for the Persian-English translation practice service.
//!
//! Provides:
//! - Similarity scoring for typed translations (Levenshtein distance)
//! - Tiered next-example selection with a per-user anti-repeat cursor
//! - Practice score recording (upsert semantics)
//! - The data-access trait the algorithms consume
//! - Shared domain types (Difficulty, Example, PracticeRecord, etc.)

pub mod error;
pub mod recorder;
pub mod selector;
pub mod similarity;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use recorder::save_score;
pub use selector::ExampleSelector;
pub use similarity::{levenshtein_distance, similarity_score};
pub use store::ExampleStore;
pub use types::{
    Difficulty, Example, ExampleDetail, ExampleId, PracticeRecord, UnknownDifficulty, UserId,
};
