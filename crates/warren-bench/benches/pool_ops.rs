//! Criterion micro-benchmarks for pool churn, deferred flush, hierarchy
//! teardown, and snapshot encode/decode.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use warren_bench::{combat_pool, tree_pool};
use warren_pool::Pool;
use warren_test_utils::Critter;

const POOL_SIZE: usize = 4096;

/// Spawn to capacity, then destroy everything, one entity at a time.
fn bench_spawn_destroy_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn_destroy_churn");
    group.throughput(Throughput::Elements(POOL_SIZE as u64));
    group.bench_function("spawn_then_destroy_4096", |b| {
        b.iter_batched(
            || Pool::<Critter>::new(POOL_SIZE),
            |mut pool| {
                let mut handles = Vec::with_capacity(POOL_SIZE);
                for _ in 0..POOL_SIZE {
                    handles.push(pool.spawn());
                }
                for h in handles {
                    pool.destroy(h);
                }
                pool
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Queue every entity, then flush the whole frame's worth at once.
fn bench_deferred_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("deferred_flush");
    group.throughput(Throughput::Elements(POOL_SIZE as u64));
    group.bench_function("queue_and_flush_4096", |b| {
        b.iter_batched(
            || combat_pool(POOL_SIZE),
            |mut pool| {
                pool.queue_destroy_if(|_, _| true);
                pool.flush_destroy_later();
                pool
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Tear down one root with 4095 children in a single destroy.
fn bench_subtree_teardown(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtree_teardown");
    group.throughput(Throughput::Elements(POOL_SIZE as u64));
    group.bench_function("destroy_wide_tree_4096", |b| {
        b.iter_batched(
            || tree_pool(POOL_SIZE),
            |(mut pool, root)| {
                pool.destroy(root);
                pool
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Encode a full pool to memory and decode it back.
fn bench_snapshot_round_trip(c: &mut Criterion) {
    let pool = combat_pool(POOL_SIZE);
    let mut encoded: Vec<u8> = Vec::new();
    warren_snapshot::save(&pool, &mut encoded).unwrap();

    let mut group = c.benchmark_group("snapshot");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("encode_4096", |b| {
        b.iter(|| {
            let mut buf: Vec<u8> = Vec::with_capacity(encoded.len());
            warren_snapshot::save(&pool, &mut buf).unwrap();
            buf
        });
    });
    group.bench_function("decode_4096", |b| {
        b.iter_batched(
            || Pool::<Critter>::new(POOL_SIZE),
            |mut target| {
                warren_snapshot::load(&mut target, &encoded).unwrap();
                target
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_spawn_destroy_churn,
    bench_deferred_flush,
    bench_subtree_teardown,
    bench_snapshot_round_trip
);
criterion_main!(benches);
