//! Error taxonomy for both memory stores.
//!
//! Absence is data, not failure: every lookup returns `Ok(None)` or an empty
//! `Vec` when nothing matches. Errors are reserved for rejected input and for
//! statements the storage engine itself refused.

use thiserror::Error;

/// Errors returned by the recall and graph stores.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A required argument was missing or empty. Rejected before any store
    /// access; nothing is partially applied.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A relation endpoint does not exist.
    #[error("entity not found: {0}")]
    EntityNotFound(i64),

    /// The underlying SQLite engine rejected a statement. Propagated as-is,
    /// with no retry.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, MemoryError>;
