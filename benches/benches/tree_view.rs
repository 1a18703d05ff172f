// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_tree_view::builder::TreeBuilder;
use understory_tree_view::forest::Forest;
use understory_tree_view::indent::IndentCalculator;
use understory_tree_view::layout::RowLayout;
use understory_tree_view::state::TreeState;
use understory_tree_view::types::{NodeId, NodeRecord};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Every record hangs off a random earlier record (or becomes a root).
fn gen_random_records(count: usize) -> Vec<NodeRecord> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let parent_id = (rng.next_u64() % (i as u64 + 1)) as u32;
            NodeRecord::child(parent_id, format!("node {i}"))
        })
        .collect()
}

/// `roots` roots, each with `fanout` children, each with `fanout` grandchildren.
fn gen_wide_records(roots: usize, fanout: usize) -> Vec<NodeRecord> {
    let mut out = Vec::with_capacity(roots * (1 + fanout + fanout * fanout));
    for r in 0..roots {
        out.push(NodeRecord::root(format!("root {r}")));
        let root_id = out.len() as u32;
        for c in 0..fanout {
            out.push(NodeRecord::child(root_id, format!("child {c}")));
            let child_id = out.len() as u32;
            for g in 0..fanout {
                out.push(NodeRecord::child(child_id, format!("leaf {g}")));
            }
        }
    }
    out
}

/// A single chain, the deepest possible tree for its size.
fn gen_chain_records(count: usize) -> Vec<NodeRecord> {
    (0..count)
        .map(|i| NodeRecord::child(i as u32, format!("level {i}")))
        .collect()
}

fn expand_all(forest: &Forest) -> TreeState {
    let mut state = TreeState::new();
    for root in forest.roots() {
        let _ = state.set_expansion_recursive(forest, root, true);
    }
    state
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let records = gen_random_records(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                TreeBuilder::new,
                |mut builder| {
                    let forest = builder.build(&records).unwrap();
                    black_box(forest.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let records = gen_chain_records(10_000);
    group.bench_function("chain_n10000", |b| {
        b.iter_batched(
            TreeBuilder::new,
            |mut builder| {
                let forest = builder.build(&records).unwrap();
                black_box(forest.roots().len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for &fanout in &[8usize, 32] {
        let records = gen_wide_records(16, fanout);
        let forest = TreeBuilder::new().build(&records).unwrap();
        let expanded = expand_all(&forest);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_function(format!("expanded_fanout{}", fanout), |b| {
            b.iter(|| black_box(expanded.flatten(&forest).len()))
        });
        let collapsed = TreeState::new();
        group.bench_function(format!("collapsed_fanout{}", fanout), |b| {
            b.iter(|| black_box(collapsed.flatten(&forest).len()))
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    let records = gen_wide_records(16, 32);
    let forest = TreeBuilder::new().build(&records).unwrap();
    group.bench_function("toggle_root_fanout32", |b| {
        b.iter_batched(
            || expand_all(&forest),
            |mut state| {
                let changes = state.toggle_expansion(&forest, NodeId::new(0));
                black_box(changes.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let records = gen_wide_records(16, 32);
    let forest = TreeBuilder::new().build(&records).unwrap();
    let state = expand_all(&forest);
    let rows = state.flatten(&forest);
    let mut layout = RowLayout::new(20.0, 400.0);
    layout.arrange(&rows, &IndentCalculator::default(), |id| {
        state.flags(&forest, id)
    });
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let height = layout.content_height();
    let points: Vec<_> = (0..1024)
        .map(|_| {
            let x = (rng.next_u64() % 400) as f64;
            let y = (rng.next_u64() % height as u64) as f64;
            Point::new(x, y)
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("points_1024", |b| {
        b.iter(|| {
            let hits = points
                .iter()
                .filter(|p| layout.hit_test_point(**p).is_some())
                .count();
            black_box(hits)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_flatten, bench_toggle, bench_hit_test);
criterion_main!(benches);
