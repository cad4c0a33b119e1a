//! Strict terminal operations: fold, sum, count, materialization and
//! the std iterator bridge.
//!
//! Everything here traverses iteratively, never recursing per element.
//! The unguarded operations diverge on infinite input; bound the stream
//! with `take` first, or use [`Stream::collect_bounded`] to get an error
//! instead.

use num::Zero;

use crate::error::{StreamError, StreamResult};

use super::core::Stream;

impl<T: Clone + 'static> Stream<T> {
    /// Folds the whole stream. Strict: terminates only on finite
    /// streams and diverges on infinite input.
    pub fn fold<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        let mut acc = init;
        let mut current = self.clone();
        while let Some((value, rest)) = current.uncons() {
            acc = combine(acc, value);
            current = rest;
        }
        acc
    }

    /// Sum of all elements. Strict; diverges on infinite input.
    pub fn sum(&self) -> T
    where
        T: Zero,
    {
        self.fold(T::zero(), |acc, value| acc + value)
    }

    /// Number of elements. Strict; diverges on infinite input.
    pub fn count(&self) -> usize {
        self.fold(0, |n, _| n + 1)
    }

    /// Materializes the stream into a vector. Strict; diverges on
    /// infinite input.
    pub fn to_vec(&self) -> Vec<T> {
        self.fold(Vec::new(), |mut acc, value| {
            acc.push(value);
            acc
        })
    }

    /// Materializes at most `limit` elements, failing if the stream has
    /// not terminated by then. The guarded form of
    /// [`to_vec`](Self::to_vec) for streams that may be infinite.
    pub fn collect_bounded(&self, limit: usize) -> StreamResult<Vec<T>> {
        let mut out = Vec::new();
        let mut current = self.clone();
        while let Some((value, rest)) = current.uncons() {
            if out.len() == limit {
                log::warn!(
                    "stream did not terminate within {} elements, giving up",
                    limit
                );
                return Err(StreamError::Unterminated { limit });
            }
            out.push(value);
            current = rest;
        }
        Ok(out)
    }

    /// An iterator walking the stream from its current head. Each
    /// `next` forces one cell; on a memoized stream the walk realizes
    /// (and retains) the prefix it visits.
    pub fn iter(&self) -> StreamIter<T> {
        StreamIter {
            current: self.clone(),
        }
    }
}

/// Iterator over a stream's elements. See [`Stream::iter`].
pub struct StreamIter<T> {
    current: Stream<T>,
}

impl<T: Clone + 'static> Iterator for StreamIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (value, rest) = self.current.uncons()?;
        self.current = rest;
        Some(value)
    }
}
