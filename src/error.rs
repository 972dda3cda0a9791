use thiserror::Error;

use crate::models::DocumentId;

/// Main error type for Tidings operations
#[derive(Error, Debug)]
pub enum TidingsError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Query contains no searchable terms")]
    EmptyQuery,

    #[error("Cannot build expansion key for term containing a delimiter byte: {0:?}")]
    InvalidPattern(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Tidings operations
pub type Result<T> = std::result::Result<T, TidingsError>;

impl TidingsError {
    /// Check if this error is a defined empty-result case rather than a fault.
    ///
    /// `EmptyQuery` and `InvalidPattern` are both recovered locally into empty
    /// results; only the rest indicate something actually went wrong.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TidingsError::EmptyQuery | TidingsError::InvalidPattern(_)
        )
    }
}
