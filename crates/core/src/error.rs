// Central Error Type for the Library

use thiserror::Error;

/// Application-level error type
///
/// Note: entity-not-found and tracking-API failure are NOT errors here. Both
/// stay in the handlers' boolean channel, which is the queue's retry signal.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Queue error: {0}")]
    Queue(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// From implementation for adapter crates (to avoid circular dependency)
impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Queue(err)
    }
}
