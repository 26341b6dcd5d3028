use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} already exists: {id}")]
    Duplicate { kind: &'static str, id: String },
}

impl StorageError {
    pub fn patient_not_found(id: impl Into<String>) -> Self {
        StorageError::NotFound {
            kind: "patient",
            id: id.into(),
        }
    }

    pub fn note_not_found(id: impl Into<String>) -> Self {
        StorageError::NotFound {
            kind: "note",
            id: id.into(),
        }
    }
}
