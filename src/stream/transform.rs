//! Lazy element-wise combinators: map, filter, zip, take, and the
//! deliberately eager skip.
//!
//! Every combinator returns a new stream whose cells are computed on
//! demand from the source; none traverses its source at call time.
//! Derived streams inherit the caching policy of their receiver, so a
//! pipeline over an ephemeral source stays ephemeral end to end.

use std::rc::Rc;

use super::core::{Stream, StreamCell};

impl<T: Clone + 'static> Stream<T> {
    /// Element-wise transform. Preserves the length and finiteness of
    /// the source exactly.
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        map_cells(self.clone(), Rc::new(f))
    }

    /// Keeps only the elements matching `pred`.
    ///
    /// Forcing the head of a filtered stream advances the source until
    /// the next match, so it may force an unbounded number of source
    /// cells. Filtering an infinite stream with a predicate satisfied
    /// only finitely often does not terminate; that is documented
    /// behavior, not a defect. The scan is a loop inside the
    /// suspension, so skipping k elements costs O(k) time and O(1)
    /// stack.
    pub fn filter<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        filter_cells(self.clone(), Rc::new(pred))
    }

    /// Pairs elements of `self` with elements of `other`, ending when
    /// either source ends: the result length is the minimum of the
    /// source lengths.
    pub fn zip<U>(&self, other: &Stream<U>) -> Stream<(T, U)>
    where
        U: Clone + 'static,
    {
        zip_cells(self.clone(), other.clone())
    }

    /// At most the first `n` elements. Never forces more than `n`
    /// source cells; `take(0)` is the empty stream regardless of the
    /// source.
    pub fn take(&self, n: usize) -> Stream<T> {
        take_cells(self.clone(), n)
    }

    /// Forces and discards the first `n` cells, returning the remaining
    /// stream.
    ///
    /// This is the one eager traversal in the combinator set: the
    /// skipped elements are unrecoverable by design, so the forcing
    /// happens here rather than inside a suspension. A stream shorter
    /// than `n` yields the empty stream.
    pub fn skip(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        for discarded in 0..n {
            match current.uncons() {
                Some((_, rest)) => current = rest,
                None => {
                    log::debug!(
                        "skip({}) exhausted the stream after {} elements",
                        n,
                        discarded
                    );
                    break;
                }
            }
        }
        current
    }
}

fn map_cells<T, U, F>(source: Stream<T>, f: Rc<F>) -> Stream<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: Fn(T) -> U + 'static,
{
    let caching = source.caching();
    Stream::suspend_cell(caching, move || match source.uncons() {
        Some((value, rest)) => StreamCell::Cons((*f)(value), map_cells(rest, Rc::clone(&f))),
        None => StreamCell::Empty,
    })
}

fn filter_cells<T, F>(source: Stream<T>, pred: Rc<F>) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    let caching = source.caching();
    Stream::suspend_cell(caching, move || {
        let mut current = source.clone();
        loop {
            match current.uncons() {
                Some((value, rest)) => {
                    if (*pred)(&value) {
                        return StreamCell::Cons(value, filter_cells(rest, Rc::clone(&pred)));
                    }
                    current = rest;
                }
                None => return StreamCell::Empty,
            }
        }
    })
}

fn zip_cells<T, U>(left: Stream<T>, right: Stream<U>) -> Stream<(T, U)>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    let caching = left.caching();
    Stream::suspend_cell(caching, move || match (left.uncons(), right.uncons()) {
        (Some((a, left_rest)), Some((b, right_rest))) => {
            StreamCell::Cons((a, b), zip_cells(left_rest, right_rest))
        }
        _ => StreamCell::Empty,
    })
}

fn take_cells<T>(source: Stream<T>, n: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    if n == 0 {
        return Stream::empty();
    }
    let caching = source.caching();
    Stream::suspend_cell(caching, move || match source.uncons() {
        Some((value, rest)) => StreamCell::Cons(value, take_cells(rest, n - 1)),
        None => StreamCell::Empty,
    })
}
