use thiserror::Error;

use crate::tags::NoteValidationError;

#[derive(Error, Debug)]
pub enum NotepressError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid note: {0}")]
    Validation(#[from] NoteValidationError),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, NotepressError>;
