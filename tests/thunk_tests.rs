use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use memo_stream::{EphemeralThunk, Thunk};

#[test]
fn test_thunk_defers_until_first_force() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let thunk = Thunk::new(move || {
        counter.set(counter.get() + 1);
        42
    });

    assert_eq!(runs.get(), 0);
    assert!(!thunk.is_evaluated());
    assert_eq!(*thunk.force(), 42);
    assert_eq!(runs.get(), 1);
    assert!(thunk.is_evaluated());
}

#[test]
fn test_thunk_runs_producer_exactly_once() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let thunk = Thunk::new(move || {
        counter.set(counter.get() + 1);
        "computed"
    });

    for _ in 0..5 {
        assert_eq!(*thunk.force(), "computed");
    }
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_ready_thunk_never_runs_a_producer() {
    let thunk = Thunk::ready(7);
    assert!(thunk.is_evaluated());
    assert_eq!(*thunk.force(), 7);
}

#[test]
fn test_get_before_and_after_force() {
    let thunk = Thunk::new(|| vec![1, 2, 3]);
    assert_eq!(thunk.get(), None);
    let forced = thunk.force_cloned();
    assert_eq!(forced, vec![1, 2, 3]);
    assert_eq!(thunk.get(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_failed_force_is_not_retried() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let thunk: Thunk<i32> = Thunk::new(move || {
        counter.set(counter.get() + 1);
        panic!("producer failed");
    });

    let first = catch_unwind(AssertUnwindSafe(|| {
        thunk.force();
    }));
    assert!(first.is_err());
    assert_eq!(runs.get(), 1);

    // The thunk is poisoned: forcing again panics without re-running
    // the producer, so its side effects happen at most once.
    let second = catch_unwind(AssertUnwindSafe(|| {
        thunk.force();
    }));
    assert!(second.is_err());
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_ephemeral_thunk_recomputes_every_force() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();
    let thunk = EphemeralThunk::new(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });

    assert_eq!(thunk.force(), 1);
    assert_eq!(thunk.force(), 2);
    assert_eq!(thunk.force(), 3);
    assert_eq!(runs.get(), 3);
}
