//! Error types for the session coordinator.

use thiserror::Error;

use crate::navigation::Screen;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A persisted record a screen depends on is absent or malformed.
    #[error("missing or malformed `{key}`, go back to {redirect}")]
    MissingPrerequisite {
        /// The storage key that could not be read.
        key: &'static str,
        /// The screen that produces the record.
        redirect: Screen,
    },

    /// A value could not be serialized for storage.
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        /// The storage key being written.
        key: &'static str,
        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// Forfeit selection failed.
    #[error(transparent)]
    Forfeit(#[from] duel_forfeit::ForfeitError),
}
