//! Lazy stream implementation with memoized, on-demand cells.
//!
//! This module provides the core Stream type plus its constructors and
//! combinators, split by concern: cell representation and basic access
//! in `core`, construction in `constructors` and `recursive`, lazy
//! combinators in `transform`, strict terminal operations in `utility`,
//! and the prime sieve pipeline in `sieve`.

pub mod core;
pub mod constructors;
pub mod recursive;
pub mod transform;
pub mod utility;
pub mod sieve;

// Re-export core types
pub use self::core::{Caching, Stream, StreamCell};

// Re-export constructors
pub use constructors::{
    cons, empty, from_iter, generate, generate_ephemeral, once, range, repeat, unfold,
    unfold_ephemeral,
};

// Re-export self-referential construction
pub use recursive::{recursive, StreamSlot};

// Re-export the iterator bridge
pub use utility::StreamIter;

// Re-export the sieve pipeline
pub use sieve::{primes, sieve};
