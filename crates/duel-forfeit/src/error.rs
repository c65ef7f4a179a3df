//! Error types for the forfeit engine.

use duel_core::{CoreError, Difficulty, Gender};

/// Result type for forfeit operations.
pub type ForfeitResult<T> = Result<T, ForfeitError>;

/// Errors that can occur while building a content pool or selecting from it.
#[derive(Debug, thiserror::Error)]
pub enum ForfeitError {
    /// A pool partition has no activities.
    #[error("no activities for {difficulty}/{gender}")]
    EmptyPool {
        /// Difficulty of the empty partition.
        difficulty: Difficulty,
        /// Gender of the empty partition.
        gender: Gender,
    },

    /// Two activities in one partition share a task key.
    #[error("duplicate task \"{task}\" in {difficulty}/{gender}")]
    DuplicateTask {
        /// The repeated task key.
        task: String,
        /// Difficulty of the partition.
        difficulty: Difficulty,
        /// Gender of the partition.
        gender: Gender,
    },

    /// A catalog entry failed validation.
    #[error("invalid activity: {0}")]
    InvalidActivity(#[from] CoreError),

    /// A catalog document could not be parsed.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}
