//! Rune Trie Benchmarks
//!
//! Benchmarks for the core trie operations, implemented using the Criterion
//! framework for statistical analysis and regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rune_trie_lib::RuneTrie;
use std::time::Duration;

/// Keys shaped like URL paths, sharing long prefixes.
fn path_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("/tenant/{}/bucket/{}/object/{}", i % 7, i % 61, i))
        .collect()
}

fn populated(keys: &[String]) -> RuneTrie<usize> {
    keys.iter().enumerate().map(|(i, k)| (k.as_str(), i)).collect()
}

/// Benchmark insertion, lookup and deletion at several sizes.
fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("rune_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let keys = path_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("put", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = RuneTrie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie.put(black_box(key), i);
                }
                trie
            });
        });

        let trie = populated(&keys);
        group.bench_with_input(BenchmarkId::new("get", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(trie.get(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete", size), &keys, |b, keys| {
            b.iter_batched(
                || populated(keys),
                |mut trie| {
                    for key in keys {
                        black_box(trie.delete(key));
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark both traversal modes.
fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("rune_trie_walk");
    let keys = path_keys(10_000);
    let trie = populated(&keys);

    group.bench_function("walk", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            trie.walk(|_, value| {
                sum += value;
                Ok::<(), ()>(())
            })
            .unwrap();
            black_box(sum)
        });
    });

    group.bench_function("longest_prefix_match", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(100) {
                black_box(trie.longest_prefix_match(key));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_point_operations, bench_traversals);
criterion_main!(benches);
