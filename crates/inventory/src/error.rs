//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::DomainError;

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failure of the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a valid inventory document.
    #[error("malformed inventory file {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// The in-memory state could not be serialized.
    #[error("failed to encode inventory state: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Error returned by [`Inventory`](crate::Inventory) operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl InventoryError {
    /// The domain error, if this is one (not-found, conflict, validation).
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Store(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_not_found)
    }
}
