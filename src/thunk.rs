//! Deferred computation cells.
//!
//! A [`Thunk`] wraps a zero-argument producer and evaluates it at most
//! once, caching the result for every later force. An [`EphemeralThunk`]
//! exposes the same `force` surface but caches nothing, re-running its
//! producer on every call; it exists so memory-bounded traversal of pure
//! sources can opt out of caching.
//!
//! Failure policy: forcing a [`Thunk`] consumes its producer up front, so
//! a producer that panics leaves the thunk poisoned and every later
//! `force` panics as well. A failed force is never retried and the
//! producer's side effects never run twice.

use std::cell::Cell;
use std::fmt;

use once_cell::unsync::OnceCell;

type Producer<T> = Box<dyn FnOnce() -> T>;

/// A deferred computation that runs at most once and caches its result.
pub struct Thunk<T> {
    producer: Cell<Option<Producer<T>>>,
    value: OnceCell<T>,
}

impl<T> Thunk<T> {
    /// Wraps `produce` without invoking it.
    pub fn new<F>(produce: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Thunk {
            producer: Cell::new(Some(Box::new(produce))),
            value: OnceCell::new(),
        }
    }

    /// A thunk that is already evaluated; `force` never runs a producer.
    pub fn ready(value: T) -> Self {
        Thunk {
            producer: Cell::new(None),
            value: OnceCell::with_value(value),
        }
    }

    /// Evaluates the producer on first call and returns the cached result
    /// on every call after that.
    ///
    /// # Panics
    ///
    /// Panics if the thunk is poisoned (a previous force panicked) or if
    /// the producer forces its own thunk reentrantly.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| {
            let produce = self
                .producer
                .take()
                .expect("thunk poisoned: producer was consumed by a failed or reentrant force");
            produce()
        })
    }

    /// Like [`force`](Self::force), but hands out a clone of the result.
    pub fn force_cloned(&self) -> T
    where
        T: Clone,
    {
        self.force().clone()
    }

    /// True once the producer has run to completion.
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// The cached result, if the thunk has been forced.
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Mutable access to the cached result, if the thunk has been
    /// forced.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.get_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Thunk").field(value).finish(),
            None => f.write_str("Thunk(<deferred>)"),
        }
    }
}

/// A non-caching thunk: the producer runs on every force.
///
/// Producers must be pure; repeated forces are expected to return equal
/// values, and nothing is retained between calls.
pub struct EphemeralThunk<T> {
    producer: Box<dyn Fn() -> T>,
}

impl<T> EphemeralThunk<T> {
    /// Wraps `produce` without invoking it.
    pub fn new<F>(produce: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        EphemeralThunk {
            producer: Box::new(produce),
        }
    }

    /// Runs the producer and returns its result. No caching.
    pub fn force(&self) -> T {
        (self.producer)()
    }
}

impl<T> fmt::Debug for EphemeralThunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EphemeralThunk")
    }
}
