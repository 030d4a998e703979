//! Error handling for person records.

/// Specialized error type for person record operations
#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    /// Age rejected by a config that forbids negative values
    #[error("Invalid age: {0} is negative")]
    NegativeAge(i32),

    /// Name rejected by a config that forbids empty names
    #[error("Invalid name: name must not be empty")]
    EmptyName,

    /// Error encoding or decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersonError {
    /// Whether this error came from a validation rule rather than from I/O or parsing
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NegativeAge(_) | Self::EmptyName)
    }
}

/// Result type for person record operations
pub type Result<T> = std::result::Result<T, PersonError>;
