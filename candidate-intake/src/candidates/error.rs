//! Error types for candidate ingestion

use thiserror::Error;

/// Client-facing failure produced when input data fails a structural or
/// semantic check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`super::CandidateService`]
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Candidate with ID {0} not found")]
    NotFound(i64),

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}
