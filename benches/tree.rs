//! Benchmarks for the bid tree.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- search
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bid_tree::{Bid, BinarySearchTree};

// ============================================================================
// HELPER FUNCTIONS - Deterministic bid generation
// ============================================================================

/// Generate `count` bids with unique ids in shuffled order
fn generate_bids(count: usize, seed: u64) -> Vec<Bid> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ids: Vec<usize> = (0..count).collect();

    for i in (1..ids.len()).rev() {
        let j = rng.gen_range(0..=i);
        ids.swap(i, j);
    }

    ids.into_iter()
        .map(|id| {
            Bid::new(
                format!("{:08}", id),
                format!("Item {}", id),
                "General Fund",
                rng.gen_range(0..1_000_000) as f64 / 100.0,
            )
        })
        .collect()
}

fn build_tree(bids: &[Bid]) -> BinarySearchTree {
    let mut tree = BinarySearchTree::with_capacity(bids.len());
    tree.extend(bids.iter().cloned());
    tree
}

// ============================================================================
// BENCHMARK: Insert
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in &[1_000usize, 10_000, 100_000] {
        let bids = generate_bids(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bids, |b, bids| {
            b.iter_batched(
                || bids.clone(),
                |bids| {
                    let mut tree = BinarySearchTree::with_capacity(bids.len());
                    tree.extend(bids);
                    black_box(tree)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &size in &[1_000usize, 10_000, 100_000] {
        let bids = generate_bids(size, 42);
        let tree = build_tree(&bids);
        let probe = bids[size / 2].id.clone();

        group.bench_with_input(BenchmarkId::new("hit", size), &probe, |b, probe| {
            b.iter(|| black_box(tree.get(black_box(probe))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            b.iter(|| black_box(tree.get(black_box("zzzzzzzz"))));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Remove
// ============================================================================

fn bench_remove(c: &mut Criterion) {
    let bids = generate_bids(10_000, 42);
    let ids: Vec<String> = bids.iter().map(|bid| bid.id.clone()).collect();

    c.bench_function("remove_all_10k", |b| {
        b.iter_batched(
            || build_tree(&bids),
            |mut tree| {
                for id in &ids {
                    tree.remove(id);
                }
                black_box(tree)
            },
            BatchSize::LargeInput,
        );
    });
}

// ============================================================================
// BENCHMARK: Traversal
// ============================================================================

fn bench_traverse(c: &mut Criterion) {
    let bids = generate_bids(100_000, 42);
    let tree = build_tree(&bids);

    let mut group = c.benchmark_group("traverse");
    group.throughput(Throughput::Elements(bids.len() as u64));
    group.bench_function("in_order_100k", |b| {
        b.iter(|| black_box(tree.iter().map(|bid| bid.amount).sum::<f64>()));
    });
    group.bench_function("size_100k", |b| {
        b.iter(|| black_box(tree.size()));
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_remove, bench_traverse);
criterion_main!(benches);
