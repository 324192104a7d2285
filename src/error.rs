use thiserror::Error;

/// Error taxonomy for the game core.
///
/// Normal gameplay (wrong answers, zero health, zero attempts) never produces
/// an error; those are ordinary state transitions.
#[derive(Debug, Error)]
pub enum GameError {
    /// An unknown tier name reached the string boundary. Fatal to the call.
    #[error("unknown difficulty tier '{0}'")]
    InvalidDifficulty(String),

    /// Non-numeric answer input. Routine for child keyboard input; callers
    /// downgrade this to an incorrect answer instead of propagating.
    #[error("answer input is not numeric: '{0}'")]
    InvalidAnswerInput(String),

    /// The storage collaborator failed. Logged and ignored; the session
    /// continues with in-memory state only.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}
