//! Stream constructors: empty, cons, once, repeat, from_iter, range,
//! unfold, generate and their non-memoizing variants.

use std::cell::RefCell;
use std::ops::Add;
use std::rc::Rc;

use num::One;

use super::core::{Caching, Stream, StreamCell};

/// The terminal stream.
pub fn empty<T: Clone + 'static>() -> Stream<T> {
    Stream::empty()
}

/// Prepends `value` to the stream produced by `tail`; `tail` is not
/// invoked until the tail stream is first inspected.
pub fn cons<T, F>(value: T, tail: F) -> Stream<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Stream<T> + 'static,
{
    Stream::cons(value, tail)
}

/// A stream of exactly one element.
pub fn once<T: Clone + 'static>(value: T) -> Stream<T> {
    Stream::cons(value, Stream::empty)
}

/// An infinite stream repeating `value`.
pub fn repeat<T: Clone + 'static>(value: T) -> Stream<T> {
    Stream::suspend_cell(Caching::Memoized, move || {
        StreamCell::Cons(value.clone(), repeat(value.clone()))
    })
}

/// A stream over any iterator.
///
/// The iterator is a one-shot source: memoization guarantees it is
/// advanced at most once per element, exactly when that element is
/// first forced, so non-rewindable sources are safe here.
pub fn from_iter<I>(iter: I) -> Stream<I::Item>
where
    I: IntoIterator + 'static,
    I::IntoIter: 'static,
    I::Item: Clone + 'static,
{
    from_shared_iter(Rc::new(RefCell::new(iter.into_iter())))
}

fn from_shared_iter<I>(iter: Rc<RefCell<I>>) -> Stream<I::Item>
where
    I: Iterator + 'static,
    I::Item: Clone + 'static,
{
    Stream::suspend_cell(Caching::Memoized, move || {
        let next = iter.borrow_mut().next();
        match next {
            Some(value) => StreamCell::Cons(value, from_shared_iter(Rc::clone(&iter))),
            None => StreamCell::Empty,
        }
    })
}

/// The integers from `start` (inclusive) to `end` (exclusive).
pub fn range<T>(start: T, end: T) -> Stream<T>
where
    T: One + Add<Output = T> + PartialOrd + Clone + 'static,
{
    unfold(start, move |n| {
        if n < end {
            let next = n.clone() + T::one();
            Some((n, next))
        } else {
            None
        }
    })
}

/// Builds a stream by repeatedly applying `step` to a seed until it
/// returns `None`. The finite-capable anamorphism.
pub fn unfold<T, S, F>(seed: S, step: F) -> Stream<T>
where
    T: Clone + 'static,
    S: Clone + 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
{
    unfold_cells(seed, Rc::new(step), Caching::Memoized)
}

/// Like [`unfold`], but nothing is cached: every traversal re-runs
/// `step` from the seed onward. Requires a pure step function.
pub fn unfold_ephemeral<T, S, F>(seed: S, step: F) -> Stream<T>
where
    T: Clone + 'static,
    S: Clone + 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
{
    unfold_cells(seed, Rc::new(step), Caching::Ephemeral)
}

/// Builds an infinite stream by repeatedly applying `step` to a seed.
/// The uniform consumption interface for external producers: `step` is
/// called at most once per element, exactly when that element is first
/// forced.
pub fn generate<T, S, F>(seed: S, step: F) -> Stream<T>
where
    T: Clone + 'static,
    S: Clone + 'static,
    F: Fn(S) -> (T, S) + 'static,
{
    unfold(seed, move |state| Some(step(state)))
}

/// Like [`generate`], but nothing is cached. Requires a pure step
/// function; traversal holds no realized prefix in memory.
pub fn generate_ephemeral<T, S, F>(seed: S, step: F) -> Stream<T>
where
    T: Clone + 'static,
    S: Clone + 'static,
    F: Fn(S) -> (T, S) + 'static,
{
    unfold_ephemeral(seed, move |state| Some(step(state)))
}

fn unfold_cells<T, S, F>(seed: S, step: Rc<F>, caching: Caching) -> Stream<T>
where
    T: Clone + 'static,
    S: Clone + 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
{
    Stream::suspend_cell(caching, move || match (*step)(seed.clone()) {
        Some((value, next)) => {
            StreamCell::Cons(value, unfold_cells(next, Rc::clone(&step), caching))
        }
        None => StreamCell::Empty,
    })
}
