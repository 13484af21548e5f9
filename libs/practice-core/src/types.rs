//! Core types for the translation practice service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a user account.
pub type UserId = i64;

/// Stable identifier for an example sentence.
pub type ExampleId = i64;

/// Difficulty tier, named after the word-frequency band it draws from.
///
/// The ordering follows band size, so `Top100 < Top10000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[serde(rename = "100")]
    Top100,
    #[serde(rename = "1000")]
    Top1000,
    #[serde(rename = "3000")]
    Top3000,
    #[serde(rename = "5000")]
    Top5000,
    #[serde(rename = "10000")]
    Top10000,
}

impl Difficulty {
    /// All tiers, from easiest to hardest.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Top100,
        Difficulty::Top1000,
        Difficulty::Top3000,
        Difficulty::Top5000,
        Difficulty::Top10000,
    ];

    /// Wire/database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top100 => "100",
            Self::Top1000 => "1000",
            Self::Top3000 => "3000",
            Self::Top5000 => "5000",
            Self::Top10000 => "10000",
        }
    }

    /// Human-readable label for difficulty pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Top100 => "Beginner (Top 100 Words)",
            Self::Top1000 => "Elementary (Top 1000 Words)",
            Self::Top3000 => "Intermediate (Top 3000 Words)",
            Self::Top5000 => "Advanced (Top 5000 Words)",
            Self::Top10000 => "Expert (Top 10000 Words)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized difficulty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty tier: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "100" => Ok(Self::Top100),
            "1000" => Ok(Self::Top1000),
            "3000" => Ok(Self::Top3000),
            "5000" => Ok(Self::Top5000),
            "10000" => Ok(Self::Top10000),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// A practice sentence pair. Difficulty is inherited from the owning word
/// through the definition, so it is not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: ExampleId,
    pub definition_id: i64,
    pub english: String,
    pub persian: String,
}

/// An example joined with its owning word's hint material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDetail {
    pub example: Example,
    pub definition: String,
    pub word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
}

/// A user's most recent score for one example.
///
/// At most one record exists per (user, example) pair; new attempts overwrite
/// the old score rather than appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub user_id: UserId,
    pub example_id: ExampleId,
    pub score: u8,
}
