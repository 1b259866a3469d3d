//! Error types for the diff engine.

use std::io;

/// Errors that abort a single diff invocation.
///
/// None of these are recovered from internally; the caller decides whether
/// to retry with fresh streams.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A line buffer or the LCS table could not be sized or reserved.
    #[error("allocation failure: could not reserve {what}")]
    AllocationFailure { what: &'static str },

    /// Doubling a line buffer would overflow `usize`.
    #[error("line buffer overflow: cannot grow beyond {capacity} bytes")]
    BufferOverflow { capacity: usize },

    /// The byte source reported an error.
    #[error("failed to read input: {0}")]
    IoRead(#[source] io::Error),

    /// The byte sink reported an error.
    #[error("failed to write diff output: {0}")]
    IoWrite(#[source] io::Error),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
