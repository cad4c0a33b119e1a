use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memo_stream::{from_iter, generate, primes};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("map_filter", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let result = from_iter(0..size)
                        .map(|x| black_box(x * 2))
                        .filter(|&x| x % 4 == 0)
                        .to_vec();
                    black_box(result)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("fold", size), size, |b, &size| {
            b.iter(|| {
                let result = from_iter(0..size).fold(0i64, |acc, x| acc + x as i64);
                black_box(result)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("random_filter_count", size),
            size,
            |b, &size| {
                let mut rng = StdRng::seed_from_u64(42);
                let values: Vec<i64> = (0..size).map(|_| rng.gen_range(0..1_000)).collect();
                b.iter(|| {
                    let result = from_iter(values.clone()).filter(|&x| x < 500).count();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

fn bench_generate_take(c: &mut Criterion) {
    c.bench_function("generate_take_10000", |b| {
        b.iter(|| {
            let wholes = generate(0u64, |n| (n, n + 1));
            black_box(wholes.take(10_000).to_vec())
        });
    });
}

fn bench_sieve(c: &mut Criterion) {
    c.bench_function("primes_500", |b| {
        b.iter(|| black_box(primes().take(500).to_vec()));
    });
}

criterion_group!(
    benches,
    bench_basic_operations,
    bench_generate_take,
    bench_sieve
);
criterion_main!(benches);
