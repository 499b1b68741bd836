// Reading Journal error types

use serde::Serialize;
use thiserror::Error;

use crate::form::fields::FieldId;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Validation { field: FieldId, message: String },

    #[error("Journal not found: {0}")]
    JournalNotFound(String),

    #[error("Journal already exists: {0}")]
    JournalExists(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for JournalError {
    fn from(err: anyhow::Error) -> Self {
        JournalError::Other(err.to_string())
    }
}

impl JournalError {
    pub fn validation(field: FieldId, message: impl Into<String>) -> Self {
        JournalError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Serializable shape of a validation failure, for the front end to
/// highlight the offending field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, JournalError>;
