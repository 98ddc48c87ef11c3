//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Catalog has no categories")]
    EmptyCatalog,

    #[error("Category '{0}' has no questions")]
    EmptyCategory(String),

    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid rating {0} (expected 0-5)")]
    InvalidRating(u8),

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),
}

impl DomainError {
    /// Check if this error means the catalog itself is malformed
    pub fn is_malformed_catalog(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyCatalog
                | DomainError::EmptyCategory(_)
                | DomainError::DuplicateCategoryId(_)
                | DomainError::DuplicateQuestionId(_)
                | DomainError::InvalidQuestion(_)
        )
    }
}
