//! Typed error enum for the service layer.
//!
//! Keeps text-generation failures apart from database failures so callers
//! can report them differently.

use sqlchat_llm::LlmError;
use sqlchat_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and LLM failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided invalid input (empty question).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Text-generation call failed (translation or insights).
    #[error("text generation failed: {0}")]
    Llm(#[from] LlmError),

    /// Database access outside of running generated SQL (schema, open).
    #[error("database error: {0}")]
    Storage(#[from] StorageError),

    /// Generated SQL failed to run.
    #[error("database error: {source}")]
    Execution {
        sql: String,
        #[source]
        source: StorageError,
    },

    /// A blocking database task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Blocking(String),
}

impl ServiceError {
    /// SQL that was being executed when the error happened, if any.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Execution { sql, .. } => Some(sql),
            _ => None,
        }
    }

    /// Whether the failure came from the database rather than the LLM.
    #[must_use]
    pub const fn is_database(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Execution { .. })
    }
}
