//! Benchmarks comparing IndexedMaxHeap against std::collections::BinaryHeap.
//!
//! Run with: cargo bench -p nexus-heap
//!
//! BinaryHeap has no keyed operations, so only push/pop are compared head to
//! head. Keyed operations are measured on their own.

use std::collections::BinaryHeap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_heap::{ByPriority, ByPriorityFifo, IndexedMaxHeap, QueueElement};

const SIZES: [u64; 3] = [64, 1_024, 16_384];

/// Deterministic scramble of `0..n`.
fn priority(i: u64, n: u64) -> u64 {
    (i * 7 + 13) % n
}

// ============================================================================
// Push then drain
// ============================================================================

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for n in SIZES {
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("indexed/fifo", n), &n, |b, &n| {
            let mut heap = IndexedMaxHeap::with_capacity(n as usize, ByPriorityFifo);
            b.iter(|| {
                for i in 0..n {
                    heap.enqueue(QueueElement::new(i, (), priority(i, n))).unwrap();
                }
                while let Ok(e) = heap.pop() {
                    black_box(e);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed/priority", n), &n, |b, &n| {
            let mut heap = IndexedMaxHeap::with_capacity(n as usize, ByPriority);
            b.iter(|| {
                for i in 0..n {
                    heap.enqueue(QueueElement::new(i, (), priority(i, n))).unwrap();
                }
                while let Ok(e) = heap.pop() {
                    black_box(e);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            let mut heap = BinaryHeap::with_capacity(n as usize);
            b.iter(|| {
                for i in 0..n {
                    heap.push((priority(i, n), i));
                }
                while let Some(e) = heap.pop() {
                    black_box(e);
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Keyed operations at steady state
// ============================================================================

fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed");

    for n in SIZES {
        let mut heap = IndexedMaxHeap::with_capacity(n as usize, ByPriorityFifo);
        for i in 0..n {
            heap.enqueue(QueueElement::new(i, (), priority(i, n))).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("set_priority", n), &n, |b, &n| {
            let mut i = 0u64;
            b.iter(|| {
                i = (i + 1) % n;
                black_box(heap.set_priority(&i, priority(i * 31, n)));
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_enqueue", n), &n, |b, &n| {
            let mut i = 0u64;
            b.iter(|| {
                i = (i + 1) % n;
                if let Some(e) = heap.remove(&i) {
                    heap.enqueue(black_box(e)).unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_keyed);
criterion_main!(benches);
