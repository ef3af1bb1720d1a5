// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover expansion basics.
//!
//! This minimal example drags a node over the parent of the cursor, lets the debounce delay
//! elapse, then drops and watches the expansion collapse.
//!
//! Run:
//! - `RUST_LOG=understory_expand=trace cargo run -p understory_demos --example expand_basics`

use core::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_expand::driver::HoverExpand;
use understory_expand::types::{DropZone, HoverSnapshot, RootedView, SnapshotStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Outline: Home > Projects > Rust > Understory, with the cursor on "Understory"
    // and "Home" collapsed out of view.
    let cursor = vec!["home", "projects", "rust", "understory"];
    let mut doc = RootedView::new();
    doc.set_hidden_above_cursor(1);
    let mut expand = HoverExpand::new(doc);

    let mut store = SnapshotStore::new(HoverSnapshot {
        cursor: Some(cursor),
        drag_in_progress: true,
        ..HoverSnapshot::default()
    });

    let mut now = Duration::ZERO;
    let mut step = |store: &mut SnapshotStore<&'static str>, label: &str, dt_ms: u64| {
        now += Duration::from_millis(dt_ms);
        let ran = expand.update(store, now);
        let fired = expand.tick(store, now);
        println!(
            "{:>6} ms  {label:<32} run={ran:?} fired={fired:?} expanded={:?}",
            now.as_millis(),
            store.state.expand_hover_top_path
        );
    };

    step(&mut store, "drag starts", 0);

    store.state.hovering_path = Some(vec!["home", "projects", "rust"]);
    store.state.hover_zone = Some(DropZone::Node);
    step(&mut store, "hover over \"rust\"", 50);

    step(&mut store, "no-op tick", 400);
    step(&mut store, "delay elapses", 600);

    store.state.drag_in_progress = false;
    store.state.hovering_path = None;
    store.state.hover_zone = None;
    step(&mut store, "drop", 100);

    println!("\n== Dispatched ==");
    for signal in &store.dispatched {
        println!("  {:?}", signal.path);
    }
}
