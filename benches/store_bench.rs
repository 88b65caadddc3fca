//! Benchmarks for TreeKV store operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;
use treekv::{Config, Store};

/// Scrambled key order keeps the unbalanced tree reasonably shallow
fn scrambled_keys(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("key{:08}", (i * 7919) % count).into_bytes())
        .collect()
}

fn filled_store(config: Config, keys: &[Vec<u8>]) -> Store {
    let mut store = Store::new(config);
    for key in keys {
        store.insert(key, b"value-bytes-for-benchmarking");
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    let keys = scrambled_keys(10_000);

    c.bench_function("insert 10k scrambled keys", |b| {
        b.iter(|| filled_store(Config::default(), black_box(&keys)))
    });

    let store = filled_store(Config::default(), &keys);
    c.bench_function("search hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(store.search(&keys[i]))
        })
    });

    c.bench_function("update in place", |b| {
        let mut store = filled_store(Config::default(), &keys);
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(store.update(&keys[i], b"new"))
        })
    });

    c.bench_function("delete all", |b| {
        b.iter_batched(
            || filled_store(Config::default(), &keys),
            |mut store| {
                for key in &keys {
                    store.delete(key);
                }
                store
            },
            BatchSize::LargeInput,
        )
    });

    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_path(temp_dir.path().join("bench.bin"))
        .build();
    // Snapshots are written in key order, so reloading builds a list-shaped
    // tree in quadratic time; keep this set small.
    let mut store = filled_store(config, &scrambled_keys(2_000));

    c.bench_function("save 2k", |b| b.iter(|| store.save()));

    store.save();
    c.bench_function("load 2k", |b| b.iter(|| store.reload()));
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
