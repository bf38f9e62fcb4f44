//! Error Types
//!
//! Storage and preview-session errors. Neither is fatal: storage failures
//! fall back to defaults, rejected transitions leave the session as it was.

use thiserror::Error;

/// Result type for key-value store access
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the persistent key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No backing storage (e.g. localStorage disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {key}: {message}")]
    Read { key: String, message: String },

    /// Includes quota errors
    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Transitions the preview session refused to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("No answer selected")]
    EmptySelection,

    /// The current question was already checked
    #[error("Question is not awaiting an answer")]
    NotAnswering,

    #[error("Question has not been checked yet")]
    NotChecked,

    #[error("Current question is not the last one")]
    NotLastQuestion,

    #[error("Current question is the last one")]
    LastQuestion,

    #[error("Quiz already finished")]
    Finished,

    #[error("Quiz has no questions")]
    NoQuestions,
}
