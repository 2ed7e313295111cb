//! Error types for the progress store boundary.
//!
//! Scheduling, selection, and stats are total functions and never fail;
//! only storage backends can.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a [`crate::store::ProgressStore`] implementation.
///
/// A missing record is not an error; stores report absence as `Ok(None)`
/// and callers initialize lazily.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("invalid record for {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}
