//! Error types for memo-stream operations.
//!
//! Resource exhaustion from unbounded memoized traversal is a designed-in
//! risk of the caching contract, not a catchable error: callers bound
//! their traversals with `take`/`skip` or opt into ephemeral streams.

use thiserror::Error;

/// Main error type for lazy stream operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// `head` or `tail` was called on the empty stream.
    #[error("operation requires a non-empty stream")]
    EmptyStream,
    /// A bounded strict operation ran past its element limit without
    /// reaching the end of the stream.
    #[error("stream did not terminate within {limit} elements")]
    Unterminated { limit: usize },
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
