// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_expand::driver::HoverExpand;
use understory_expand::policy::evaluate;
use understory_expand::types::{DropZone, HoverSnapshot, RootedView, SnapshotStore};

/// A cursor `depth` levels deep, hovered over the ancestor whose expansion
/// reveals its first hidden level.
fn deep_hover(depth: u32, hidden: usize) -> (HoverSnapshot<u32>, RootedView<u32>) {
    let cursor: Vec<u32> = (0..depth).collect();
    let hover = cursor[..cursor.len() - hidden].to_vec();
    let mut doc = RootedView::new();
    doc.set_hidden_above_cursor(hidden);
    let snapshot = HoverSnapshot {
        cursor: Some(cursor),
        hovering_path: Some(hover),
        hover_zone: Some(DropZone::Node),
        drag_in_progress: true,
        ..HoverSnapshot::default()
    };
    (snapshot, doc)
}

fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");
    for &depth in &[4u32, 32, 256] {
        let (snapshot, doc) = deep_hover(depth, 1);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("evaluate_depth{}", depth), |b| {
            b.iter(|| black_box(evaluate(black_box(&snapshot), &doc)));
        });
    }
    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver");
    let n = 1_000u64;
    group.throughput(Throughput::Elements(n));
    group.bench_function("hover_jitter_then_fire", |b| {
        b.iter_batched(
            || {
                let (snapshot, doc) = deep_hover(16, 1);
                (HoverExpand::new(doc), SnapshotStore::new(snapshot))
            },
            |(mut expand, mut store)| {
                // Alternate between the qualifying row and its gap band.
                for i in 0..n {
                    store.state.hover_zone = Some(if i % 2 == 0 {
                        DropZone::Node
                    } else {
                        DropZone::Between
                    });
                    let now = Duration::from_millis(i);
                    let _ = expand.update(&mut store, now);
                    let _ = expand.tick(&mut store, now);
                }
                let _ = expand.tick(&mut store, Duration::from_secs(60));
                black_box(store.dispatched.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_policy, bench_driver);
criterion_main!(benches);
