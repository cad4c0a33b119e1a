//! Core stream representation: cells, suspensions and the basic operations.
//!
//! A [`Stream`] is a cheaply clonable handle over the suspension of its
//! head [`StreamCell`]. Forcing the suspension realizes one cell: either
//! the terminal marker or an element plus the suspended remainder. On a
//! memoized stream the realized cell is cached in place, so repeated
//! access is O(1) and shared by every handle into the stream.

use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::thunk::{EphemeralThunk, Thunk};

/// Caching policy of a stream's suspensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caching {
    /// Forced cells are cached; every element is computed at most once
    /// and realized prefixes stay resident while any handle lives.
    Memoized,
    /// Cells are recomputed on every traversal; nothing is retained.
    /// Requires pure producers.
    Ephemeral,
}

/// One realized node of a stream.
#[derive(Debug, Clone)]
pub enum StreamCell<T> {
    /// Terminal marker.
    Empty,
    /// A realized element plus the suspended remainder.
    Cons(T, Stream<T>),
}

/// The deferred computation of a stream's head cell.
enum Suspension<T> {
    Memo(Thunk<StreamCell<T>>),
    Ephemeral(EphemeralThunk<StreamCell<T>>),
}

/// A lazy, potentially infinite, singly-linked sequence with on-demand,
/// memoized element computation.
///
/// Cloning a stream clones a handle; cells realized through any handle
/// are visible through all of them. The type is deliberately `!Send`:
/// forcing is a single-owner affair.
pub struct Stream<T> {
    susp: Rc<Suspension<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            susp: Rc::clone(&self.susp),
        }
    }
}

impl<T> Drop for Stream<T> {
    // Unlinks solely-owned realized cells iteratively. The default
    // recursive drop would use one stack frame per realized cell and
    // overflow on long prefixes.
    fn drop(&mut self) {
        while let Some(StreamCell::Cons(_, tail)) = Rc::get_mut(&mut self.susp)
            .and_then(|susp| match susp {
                Suspension::Memo(thunk) => thunk.get_mut(),
                Suspension::Ephemeral(_) => None,
            })
            .map(|cell| std::mem::replace(cell, StreamCell::Empty))
        {
            *self = tail;
        }
    }
}

impl<T> Stream<T> {
    /// True if both handles designate the same suspension. Two handles
    /// obtained by forcing the same memoized tail always compare equal.
    pub fn ptr_eq(&self, other: &Stream<T>) -> bool {
        Rc::ptr_eq(&self.susp, &other.susp)
    }

    /// The caching policy this stream was built with.
    pub fn caching(&self) -> Caching {
        match &*self.susp {
            Suspension::Memo(_) => Caching::Memoized,
            Suspension::Ephemeral(_) => Caching::Ephemeral,
        }
    }

    fn is_realized(&self) -> bool {
        match &*self.susp {
            Suspension::Memo(thunk) => thunk.is_evaluated(),
            Suspension::Ephemeral(_) => false,
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    // Never forces the stream.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("caching", &self.caching())
            .field("realized", &self.is_realized())
            .finish()
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// The terminal stream.
    ///
    /// Generic monomorphization rules out a shared singleton; the cost
    /// per call is one small allocation holding an already-realized
    /// terminal cell.
    pub fn empty() -> Self {
        Stream::from_cell(StreamCell::Empty)
    }

    /// Prepends `value` to the stream produced by `tail`.
    ///
    /// `tail` is wrapped as a thunk and is not invoked here; it runs on
    /// the first inspection of the tail stream. Constructing a
    /// self-referential infinite stream therefore does not recurse.
    pub fn cons<F>(value: T, tail: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Stream::from_cell(StreamCell::Cons(value, Stream::suspend(tail)))
    }

    /// A stream that delegates to the stream returned by `delayed` on
    /// first force. This is the general deferral primitive `cons` tails
    /// and recursive definitions build on.
    pub fn suspend<F>(delayed: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Stream {
            susp: Rc::new(Suspension::Memo(Thunk::new(move || delayed().force_cell()))),
        }
    }

    /// Builds a stream whose head cell is computed by `produce`, cached
    /// or not per `caching`. Combinators use this to inherit the policy
    /// of their source.
    pub(crate) fn suspend_cell<F>(caching: Caching, produce: F) -> Self
    where
        F: Fn() -> StreamCell<T> + 'static,
    {
        let susp = match caching {
            Caching::Memoized => Suspension::Memo(Thunk::new(produce)),
            Caching::Ephemeral => Suspension::Ephemeral(EphemeralThunk::new(produce)),
        };
        Stream { susp: Rc::new(susp) }
    }

    fn from_cell(cell: StreamCell<T>) -> Self {
        Stream {
            susp: Rc::new(Suspension::Memo(Thunk::ready(cell))),
        }
    }

    /// Forces the head cell and returns a clone of it: the terminal
    /// marker, or the realized element plus the suspended remainder.
    pub fn force_cell(&self) -> StreamCell<T> {
        match &*self.susp {
            Suspension::Memo(thunk) => thunk.force_cloned(),
            Suspension::Ephemeral(thunk) => thunk.force(),
        }
    }

    /// Forces the head cell and splits it into element and remainder.
    /// The non-erroring primitive the combinators drive.
    pub fn uncons(&self) -> Option<(T, Stream<T>)> {
        match self.force_cell() {
            StreamCell::Cons(value, rest) => Some((value, rest)),
            StreamCell::Empty => None,
        }
    }

    /// True iff the realized head cell is the terminal marker.
    /// Idempotent: repeated calls never change the answer.
    pub fn is_empty(&self) -> bool {
        matches!(self.force_cell(), StreamCell::Empty)
    }

    /// The first element of the stream.
    pub fn head(&self) -> StreamResult<T> {
        match self.force_cell() {
            StreamCell::Cons(value, _) => Ok(value),
            StreamCell::Empty => Err(StreamError::EmptyStream),
        }
    }

    /// The stream after the first element. Forcing the returned handle
    /// twice yields the identical successor, computed once.
    pub fn tail(&self) -> StreamResult<Stream<T>> {
        match self.force_cell() {
            StreamCell::Cons(_, rest) => Ok(rest),
            StreamCell::Empty => Err(StreamError::EmptyStream),
        }
    }
}
