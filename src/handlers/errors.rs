use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::store::StoreError;

pub const FOLDER_NOT_FOUND: &str = "Folder doesn't exist";
pub const NOTE_NOT_FOUND: &str = "Note doesn't exist";
pub const SERVER_ERROR: &str = "server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("Missing '{field}' in request body"))
    }

    /// The message a client gets to see; store failures stay opaque.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(_) | ApiError::NotFound(_) => self.to_string(),
            ApiError::Store(_) => SERVER_ERROR.to_owned(),
        }
    }
}

/// `{ "error": { "message": "..." } }`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(value: &ApiError) -> Self {
        ErrorBody::new(value.public_message())
    }
}
