use thiserror::Error;

/// Main error type for word ranking operations
#[derive(Error, Debug)]
pub enum WordRankError {
    #[error("unrecognized input kind: {0}")]
    UnrecognizedInputKind(String),

    #[error("malformed range specification: {0}")]
    MalformedRange(String),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(#[source] bincode::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Result type alias for word ranking operations
pub type Result<T> = std::result::Result<T, WordRankError>;

impl WordRankError {
    /// Check if this error was caused by invalid client input rather than
    /// an I/O or environment failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WordRankError::UnrecognizedInputKind(_) | WordRankError::MalformedRange(_)
        )
    }
}
