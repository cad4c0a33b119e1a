//! Two-phase construction of self-referential streams.
//!
//! A stream defined in terms of itself (Fibonacci-style) needs its
//! defining closures to capture a reference to a stream that does not
//! exist yet. [`recursive`] makes that safe: it allocates a write-once
//! [`StreamSlot`], runs the definition closure with the slot, and only
//! then populates the slot with the finished stream. Closures obtained
//! from [`StreamSlot::stream`] defer their read of the slot until they
//! are forced, which by construction happens after population.
//!
//! A self-referential stream's realized cells form a reference cycle,
//! so they are not reclaimed when the last outside handle drops. That
//! is within the ownership contract: bound how much of such a stream
//! you realize.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::core::Stream;

/// A write-once slot a stream definition can capture before the stream
/// it designates exists.
pub struct StreamSlot<T> {
    inner: Rc<OnceCell<Stream<T>>>,
}

impl<T> Clone for StreamSlot<T> {
    fn clone(&self) -> Self {
        StreamSlot {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> StreamSlot<T> {
    fn new() -> Self {
        StreamSlot {
            inner: Rc::new(OnceCell::new()),
        }
    }

    /// A stream that forwards to the slot's contents on first force.
    ///
    /// # Panics
    ///
    /// Forcing the returned stream before the slot is populated panics:
    /// the definition closure must only force it from inside deferred
    /// tails, never while the definition is still being built.
    pub fn stream(&self) -> Stream<T> {
        let slot = self.clone();
        Stream::suspend(move || slot.resolve())
    }

    fn resolve(&self) -> Stream<T> {
        self.inner
            .get()
            .cloned()
            .expect("self-referential stream forced before its definition was completed")
    }

    fn populate(&self, stream: Stream<T>) {
        if self.inner.set(stream).is_err() {
            panic!("stream slot populated twice");
        }
    }
}

/// Builds a stream that may refer to itself through the slot handed to
/// `define`.
///
/// The head cell of the result is constructed inside `define`; the slot
/// is populated immediately afterwards, before any deferred tail can be
/// forced.
pub fn recursive<T, F>(define: F) -> Stream<T>
where
    T: Clone + 'static,
    F: FnOnce(&StreamSlot<T>) -> Stream<T>,
{
    let slot = StreamSlot::new();
    let stream = define(&slot);
    slot.populate(stream.clone());
    stream
}
