//! Prime sieving as a stream pipeline.
//!
//! Semantically this is the classic recursive composition
//! `sieve(s) = cons(s.head(), || sieve(s.tail().filter(|x| x % s.head() != 0)))`,
//! which stacks one filter layer per prime and grows the call depth
//! with every element consumed. The implementation here threads a
//! shared divisor table through the suspensions instead: each forced
//! cell scans the remaining source for the next candidate no known
//! prime divides, then records it. Same semantics, flat call stack,
//! one predicate table instead of a tower of closures.

use std::cell::RefCell;
use std::rc::Rc;

use num::Integer;

use super::constructors::generate;
use super::core::{Caching, Stream, StreamCell};

/// Filters `source` down to the elements not divisible by any element
/// emitted before them. Over the integers ascending from 2 this yields
/// the primes.
///
/// The output is always memoized regardless of the source policy: the
/// divisor table is stateful, and re-running a suspension would record
/// its divisor twice.
pub fn sieve<T>(source: Stream<T>) -> Stream<T>
where
    T: Integer + Clone + 'static,
{
    sieve_cells(source, Rc::new(RefCell::new(Vec::new())))
}

/// The prime numbers, ascending.
pub fn primes() -> Stream<u64> {
    sieve(generate(2u64, |n| (n, n + 1)))
}

fn sieve_cells<T>(source: Stream<T>, divisors: Rc<RefCell<Vec<T>>>) -> Stream<T>
where
    T: Integer + Clone + 'static,
{
    Stream::suspend_cell(Caching::Memoized, move || {
        let mut current = source.clone();
        loop {
            match current.uncons() {
                Some((candidate, rest)) => {
                    let composite = divisors
                        .borrow()
                        .iter()
                        .any(|d| candidate.is_multiple_of(d));
                    if composite {
                        current = rest;
                        continue;
                    }
                    divisors.borrow_mut().push(candidate.clone());
                    log::trace!("sieve admitted a divisor ({} active)", divisors.borrow().len());
                    return StreamCell::Cons(candidate, sieve_cells(rest, Rc::clone(&divisors)));
                }
                None => return StreamCell::Empty,
            }
        }
    })
}
