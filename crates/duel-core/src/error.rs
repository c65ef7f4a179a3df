/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing core values.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A player name was empty or whitespace only.
    #[error("player name must not be empty")]
    EmptyName,

    /// An activity was declared with a zero duration.
    #[error("activity \"{0}\" must last at least one second")]
    ZeroDuration(String),

    /// An activity was declared without a task key.
    #[error("activity task must not be empty")]
    EmptyTask,

    /// A difficulty string did not name a known level.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
