use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use skipmap::{SkipList, SkipListBuilder};

fn make_sample_keys(
    n: usize,
    seed: u64,
) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(i64::MIN..=i64::MAX)).collect()
}

fn filled(keys: &[i64]) -> SkipList<i64, i64> {
    let mut sl = SkipListBuilder::new().seed(1).build().unwrap();
    for k in keys {
        sl.insert(*k, *k);
    }
    sl
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_set");
    for &n in &[1_000usize, 10_000, 50_000] {
        let keys = make_sample_keys(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fresh", n), &keys, |b, keys| {
            b.iter(|| black_box(filled(keys)))
        });

        let mut sl = filled(&keys);
        group.bench_with_input(BenchmarkId::new("update", n), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    black_box(sl.set(*k, k.wrapping_add(1)));
                }
            })
        });
    }
    group.finish();
}

fn bench_get_hit_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_get");
    for &n in &[1_000usize, 10_000, 50_000] {
        let hits = make_sample_keys(n, 123);
        let misses = make_sample_keys(n, 9999);
        let sl = filled(&hits);

        group.bench_with_input(BenchmarkId::new("hit", n), &n, |b, &_n| {
            b.iter(|| {
                for k in hits.iter().take(1000) {
                    black_box(sl.get(k));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("miss", n), &n, |b, &_n| {
            b.iter(|| {
                for k in misses.iter().take(1000) {
                    black_box(sl.get(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_remove");
    for &n in &[1_000usize, 10_000, 50_000] {
        let keys = make_sample_keys(n, 777);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut sl = filled(keys);
                for k in keys {
                    black_box(sl.remove(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_iterate");
    for &n in &[1_000usize, 10_000, 50_000] {
        let sl = filled(&make_sample_keys(n, 2026));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                for (k, v) in sl.iter() {
                    black_box((k, v));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get_hit_miss,
    bench_remove,
    bench_iterate
);
criterion_main!(benches);
