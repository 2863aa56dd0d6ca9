// Application error types

/// Errors surfaced by the application layer. All of them are local: invalid
/// input is reported back to the user, everything else degrades with a
/// diagnostic and the session keeps running.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Invalid workout input: {0}")]
    InvalidInput(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
