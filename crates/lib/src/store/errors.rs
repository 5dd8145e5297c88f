//! Error types for the session store.

use thiserror::Error;

/// Errors raised by the session store.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every store handle was dropped while an observer was waiting for a change.
    #[error("Session store closed")]
    Closed,
}

impl StoreError {
    /// Check if this error means the store is gone.
    pub fn is_closed(&self) -> bool {
        matches!(self, StoreError::Closed)
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
