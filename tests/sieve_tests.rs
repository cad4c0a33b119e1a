use memo_stream::{from_iter, generate, primes, sieve};

#[test]
fn test_sieve_first_primes() {
    let candidates = generate(2u64, |n| (n, n + 1));
    assert_eq!(sieve(candidates).take(6).to_vec(), vec![2, 3, 5, 7, 11, 13]);
}

#[test]
fn test_primes_convenience_stream() {
    assert_eq!(
        primes().take(10).to_vec(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[test]
fn test_sieve_over_a_finite_source() {
    let sieved = sieve(from_iter(2..=30));
    assert_eq!(sieved.to_vec(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

#[test]
fn test_sieve_composes_with_other_combinators() {
    assert_eq!(primes().skip(10).take(5).to_vec(), vec![31, 37, 41, 43, 47]);
    assert_eq!(primes().take(4).map(|p| p * p).to_vec(), vec![4, 9, 25, 49]);
}

#[test]
fn test_deep_consumption_keeps_the_stack_flat() {
    // One filter layer per prime in the naive formulation; here the
    // divisor table is threaded iteratively, so a deep read must not
    // grow the call stack with the number of primes consumed.
    let deep = primes().take(200).to_vec();
    assert_eq!(deep.len(), 200);
    assert_eq!(deep[0], 2);
    assert_eq!(deep[199], 1223);
}

#[test]
fn test_sieve_is_memoized_across_reads() {
    let stream = primes();
    let first = stream.take(20).to_vec();
    let second = stream.take(20).to_vec();
    assert_eq!(first, second);
}
