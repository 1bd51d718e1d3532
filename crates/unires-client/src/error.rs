//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Domain error (not found, invalid filter, invalid stored value).
    #[error(transparent)]
    Domain(#[from] unires_core::Error),

    /// The store rejected a statement or could not be opened.
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Pool misconfiguration or a failed worker task.
    #[error("pool error: {0}")]
    Pool(String),

    /// The pool has been closed.
    #[error("connection pool is closed")]
    PoolClosed,

    /// No connection became available within the acquire timeout.
    #[error("timed out waiting for a connection")]
    Timeout,
}

impl Error {
    /// Whether this is a not-found lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Domain(e) if e.is_not_found())
    }
}
