//! memo-stream - a lazy, memoizing pull-stream library.
//!
//! Streams are potentially unbounded, singly-linked sequences whose
//! elements are computed on demand and cached in place, so every
//! element is computed at most once per stream instance. The caching
//! is the deliberate tradeoff that makes one-shot sources safe to
//! consume lazily; streams over pure producers can opt out through the
//! ephemeral constructors when traversal must stay memory-bounded.

pub mod error;
pub mod thunk;
pub mod stream;

// Re-export the public surface at the crate root
pub use error::{StreamError, StreamResult};
pub use thunk::{EphemeralThunk, Thunk};
pub use stream::*;
