// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated drag session over laid-out rows.
//!
//! Pointer samples are classified into drop zones with the kurbo adapter, fed into the
//! driver as snapshots, and the host loop ticks the debounce controller between samples.
//! The configuration is loaded from TOML, with a shorter delay than the default.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example expand_drag_session`

use core::time::Duration;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_expand::adapters::zone::drop_zone_at;
use understory_expand::config::ExpandConfig;
use understory_expand::driver::HoverExpand;
use understory_expand::types::{AlertKind, HoverSnapshot, RootedView, SnapshotStore};

const CONFIG: &str = r#"
delay_ms = 300
suppress_alerts = "DELETE_DROP_HINT | COPY_ONE_DROP_HINT"
"#;

const ROW_HEIGHT: f64 = 24.0;
const GAP: f64 = 6.0;

/// Visible rows, top to bottom: (path, indent level).
fn rows() -> Vec<(Vec<u32>, f64)> {
    vec![
        (vec![1, 2], 0.0),
        (vec![1, 2, 3], 1.0),
        (vec![1, 2, 3, 4], 2.0),
        (vec![1, 5], 0.0),
    ]
}

fn row_rect(index: usize, indent: f64) -> Rect {
    let y = index as f64 * (ROW_HEIGHT + GAP);
    Rect::new(indent * 16.0, y, 300.0, y + ROW_HEIGHT)
}

/// Find the row and zone under `pt`.
fn hover_at(pt: Point) -> Option<(Vec<u32>, understory_expand::types::DropZone)> {
    rows()
        .into_iter()
        .enumerate()
        .find_map(|(i, (path, indent))| drop_zone_at(row_rect(i, indent), pt, GAP).map(|z| (path, z)))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ExpandConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    // The cursor sits on node 4; node 1 is collapsed out of view above it.
    let mut doc = RootedView::new();
    doc.set_hidden_above_cursor(1);
    let mut expand = HoverExpand::with_config(doc, &config);
    let mut store = SnapshotStore::new(HoverSnapshot {
        cursor: Some(vec![1, 2, 3, 4]),
        drag_in_progress: true,
        ..HoverSnapshot::default()
    });

    // (time ms, pointer, alert)
    let samples = [
        (0, Point::new(120.0, 70.0), None),
        (100, Point::new(120.0, 40.0), None),
        (250, Point::new(120.0, 45.0), None),
        (450, Point::new(120.0, 45.0), None),
        (500, Point::new(60.0, 10.0), None),
        (900, Point::new(60.0, 10.0), Some(AlertKind::DELETE_DROP_HINT)),
        (1_000, Point::new(60.0, 200.0), None),
    ];

    for (t, pt, alert) in samples {
        let now = Duration::from_millis(t);
        match hover_at(pt) {
            Some((path, zone)) => {
                store.state.hovering_path = Some(path);
                store.state.hover_zone = Some(zone);
            }
            None => {
                store.state.hovering_path = None;
                store.state.hover_zone = None;
            }
        }
        store.state.alert = alert;

        let ran = expand.update(&mut store, now);
        let fired = expand.tick(&mut store, now);
        tracing::info!(
            t,
            hovering = ?store.state.hovering_path,
            zone = ?store.state.hover_zone,
            ?ran,
            ?fired,
            expanded = ?store.state.expand_hover_top_path,
            "sample"
        );
    }

    store.state.drag_in_progress = false;
    let ran = expand.update(&mut store, Duration::from_millis(1_100));
    tracing::info!(?ran, expanded = ?store.state.expand_hover_top_path, "drop");

    println!("== Dispatched ==");
    for signal in &store.dispatched {
        println!("  {:?}", signal.path);
    }
}
