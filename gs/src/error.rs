//! GradeStore error types

use thiserror::Error;

/// Raised when an index falls outside `0..len` of a grade collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of range for {len} grades")]
pub struct IndexError {
    /// The rejected index as the caller supplied it
    pub index: i64,
    /// Collection length at the time of the call
    pub len: usize,
}

impl IndexError {
    pub fn new(index: i64, len: usize) -> Self {
        Self { index, len }
    }

    pub(crate) fn from_unsigned(index: usize, len: usize) -> Self {
        Self::new(i64::try_from(index).unwrap_or(i64::MAX), len)
    }
}
