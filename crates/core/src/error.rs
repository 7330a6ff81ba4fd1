//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Storage
/// failures belong to the inventory crate's `StoreError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-finite price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank input).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted record does not exist.
    ///
    /// Displays as the console message, e.g. `Product not found.`
    #[error("{kind} not found.")]
    NotFound { kind: &'static str, id: String },

    /// A record with the same identifier already exists and replacing it is not allowed.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_console_message() {
        let err = DomainError::not_found("Product", "P9");
        assert_eq!(err.to_string(), "Product not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn conflict_is_not_a_not_found() {
        let err = DomainError::conflict("Product P1 already exists");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "conflict: Product P1 already exists");
    }
}
