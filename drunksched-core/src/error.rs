//! Error types for drunksched.

use thiserror::Error;

/// Errors that can occur in drunksched operations.
#[derive(Error, Debug)]
pub enum SchedError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("No response from '{name}' in event {event_id}")]
    ResponseNotFound { event_id: String, name: String },

    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SchedError::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SchedError::EventNotFound(_) | SchedError::ResponseNotFound { .. }
        )
    }
}

/// Result type alias for drunksched operations.
pub type SchedResult<T> = Result<T, SchedError>;
