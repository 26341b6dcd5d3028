use docnote_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("patient not found: {id}")]
    NotFound { id: String },

    #[error("summarization service error: {0}")]
    Integration(String),

    #[error("intake screen closed before the operation finished")]
    Cancelled,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
