use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClubError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Coarse error class reported to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Validation,
}

impl ClubError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ClubError::NotFound { entity, id: id.to_string() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ClubError::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClubError::NotFound { .. } => ErrorKind::NotFound,
            ClubError::Validation(_) => ErrorKind::Validation,
        }
    }
}

impl From<validator::ValidationErrors> for ClubError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClubError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClubError>;
