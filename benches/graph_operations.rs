//! Benchmark suite for dgraph operations
//!
//! Covers the handle graph API:
//! - Construction: create_handle, create_edge
//! - Reads: get_sequence (both strands), follow_edges, for_each_edge
//! - Mutation: divide_handle, apply_orientation, swap_handles
//!
//! Run: cargo bench --bench graph_operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dgraph::{Handle, HandleGraph, MutableHandleGraph, NodeId, SuccinctGraph};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BASES: &[u8] = b"ACGT";

/// Deterministic pseudo-random sequence of `len` bases.
fn make_sequence(seed: usize, len: usize) -> Vec<u8> {
    let mut state = seed as u64 ^ 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            BASES[(state & 3) as usize]
        })
        .collect()
}

/// Chain of `node_count` nodes plus a skip edge every third node, some
/// entering the reverse strand.
fn create_test_graph(node_count: usize, seq_len: usize) -> SuccinctGraph {
    let mut graph = SuccinctGraph::new();
    let handles: Vec<Handle> = (0..node_count)
        .map(|i| graph.create_handle(&make_sequence(i, seq_len)).unwrap())
        .collect();
    for i in 1..node_count {
        graph.create_edge(handles[i - 1], handles[i]).unwrap();
        if i % 3 == 0 && i >= 2 {
            let target = if i % 2 == 0 { handles[i] } else { handles[i].flip() };
            graph.create_edge(handles[i - 2], target).unwrap();
        }
    }
    graph
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn bench_create_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_handle");

    for size in [100, 1000, 10000] {
        let sequences: Vec<Vec<u8>> = (0..size).map(|i| make_sequence(i, 32)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut graph = SuccinctGraph::new();
                for seq in &sequences {
                    black_box(graph.create_handle(black_box(seq)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_create_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_edge");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut graph = SuccinctGraph::new();
                    let handles: Vec<Handle> = (0..size)
                        .map(|i| graph.create_handle(&make_sequence(i, 8)).unwrap())
                        .collect();
                    (graph, handles)
                },
                |(mut graph, handles)| {
                    for pair in handles.windows(2) {
                        graph.create_edge(black_box(pair[0]), black_box(pair[1])).unwrap();
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

fn bench_get_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_sequence");
    let graph = create_test_graph(1000, 150);

    for is_reverse in [false, true] {
        let label = if is_reverse { "reverse" } else { "forward" };
        group.bench_function(label, |b| {
            let mut id = 0u64;
            b.iter(|| {
                id = id % 1000 + 1;
                let handle = graph.get_handle(NodeId::from(id), is_reverse);
                black_box(graph.get_sequence(handle).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_follow_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("follow_edges");

    for size in [1000, 10000, 100000] {
        let graph = create_test_graph(size, 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut id = 0u64;
            b.iter(|| {
                id = id % size as u64 + 1;
                let handle = Handle::forward(NodeId::from(id));
                let mut degree = 0;
                for go_left in [false, true] {
                    graph
                        .follow_edges(handle, go_left, |next| {
                            black_box(next);
                            degree += 1;
                            true
                        })
                        .unwrap();
                }
                black_box(degree);
            });
        });
    }

    group.finish();
}

fn bench_for_each_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each_edge");

    for size in [1000, 10000] {
        let graph = create_test_graph(size, 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                graph.for_each_edge(|_| {
                    count += 1;
                    true
                });
                black_box(count);
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

fn bench_divide_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_handle");

    for pieces in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(pieces), &pieces, |b, &pieces| {
            b.iter_batched(
                || create_test_graph(200, 256),
                |mut graph| {
                    let offsets: Vec<usize> = (1..pieces).map(|i| i * 256 / pieces).collect();
                    for id in (10..200).step_by(10) {
                        let handle = Handle::forward(NodeId::from(id));
                        black_box(graph.divide_handle(handle, &offsets).unwrap());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_apply_orientation(c: &mut Criterion) {
    c.bench_function("apply_orientation", |b| {
        b.iter_batched(
            || create_test_graph(1000, 64),
            |mut graph| {
                for id in (1..=1000).step_by(7) {
                    let handle = Handle::reverse(NodeId::from(id));
                    black_box(graph.apply_orientation(handle).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_swap_handles(c: &mut Criterion) {
    c.bench_function("swap_handles", |b| {
        let mut graph = create_test_graph(10000, 8);
        let mut id = 0u64;
        b.iter(|| {
            id = id % 9999 + 1;
            let a = Handle::forward(NodeId::from(id));
            let z = Handle::forward(NodeId::from(10001 - id));
            graph.swap_handles(black_box(a), black_box(z)).unwrap();
        });
    });
}

// ---------------------------------------------------------------------------
// Criterion group registration
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_create_handle,
    bench_create_edge,
    bench_get_sequence,
    bench_follow_edges,
    bench_for_each_edge,
    bench_divide_handle,
    bench_apply_orientation,
    bench_swap_handles,
);
criterion_main!(benches);
