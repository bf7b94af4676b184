#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use primehash::{ChainingMap, OpenAddressingMap, find_mode};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut probing_map = OpenAddressingMap::new();
    let mut chaining_map = ChainingMap::with_capacity(ITEMS_AMOUNT);
    let mut rust_map = HashMap::new();
    group.bench_function("open addressing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                probing_map.put(key, value);
            }
        });
    });
    group.bench_function("chaining put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chaining_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("open addressing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(probing_map.get(key));
            }
        });
    });
    group.bench_function("chaining get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(chaining_map.get(key));
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(rust_map.get(key));
            }
        });
    });
    group.finish();
}

fn find_mode_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let words = proptest::collection::vec("[a-e]{1,3}", ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Mode benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("find_mode", |b| {
        b.iter(|| black_box(find_mode(&words)));
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches, find_mode_benches);

criterion_main!(benches);
