// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_expand --heading-base-level=0

//! Understory Expand: a deterministic, `no_std` hover-to-expand engine for outliner drag and drop.
//!
//! ## Overview
//!
//! While a node is dragged over a drop target, an ancestor context should expand after a short
//! quiet period to reveal its hidden children, and collapse again when the drag ends.
//! This crate decides *when* that happens. It does not track the pointer, render anything, or
//! store the document; the host feeds it a [`HoverSnapshot`](crate::types::HoverSnapshot) and
//! receives [`ExpandHoverTop`](crate::types::ExpandHoverTop) signals back through its
//! [`ExpandStore`](crate::types::ExpandStore).
//!
//! ## Pieces
//!
//! - [`path`](crate::path): parent, ancestry, and equality over root→target paths.
//! - [`policy`](crate::policy): the pure decision. Returns the rooted target or a labeled
//!   [`Rejection`](crate::policy::Rejection).
//! - [`debounce`](crate::debounce): owns the single pending expansion; re-reads the live state
//!   when it fires and drops the expansion while a quick drop hint is showing.
//! - [`driver`](crate::driver): [`HoverExpand`](crate::driver::HoverExpand) ties both together,
//!   collapsing first when the drag has ended.
//! - [`trigger`](crate::trigger): skips driver runs on state changes the policy does not read.
//! - [`config`](crate::config): delay and suppression set, optionally loaded from TOML.
//!
//! ## Document queries
//!
//! Rooting and the count of collapsed levels above the cursor come from the host's document
//! through [`DocumentView`](crate::types::DocumentView).
//! [`RootedView`](crate::types::RootedView) is a minimal implementation over a displayed root.
//!
//! ## Time
//!
//! There is no clock inside the crate. Hosts pass `now` as a
//! [`Duration`](core::time::Duration) since an epoch of their choosing and call
//! [`HoverExpand::tick`](crate::driver::HoverExpand::tick) from their event loop.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_expand::driver::{HoverExpand, Step};
//! use understory_expand::types::{DropZone, ExpandHoverTop, HoverSnapshot, RootedView, SnapshotStore};
//!
//! // One collapsed level hides the cursor's grandparent.
//! let mut doc = RootedView::new();
//! doc.set_hidden_above_cursor(1);
//! let mut expand = HoverExpand::new(doc);
//!
//! let mut store = SnapshotStore::new(HoverSnapshot {
//!     cursor: Some(vec!["a", "b", "c"]),
//!     hovering_path: Some(vec!["a", "b"]),
//!     hover_zone: Some(DropZone::Node),
//!     drag_in_progress: true,
//!     ..HoverSnapshot::default()
//! });
//!
//! let now = Duration::ZERO;
//! assert!(matches!(expand.update(&mut store, now), Some(Step::Scheduled(_))));
//!
//! let later = now + Duration::from_secs(1);
//! expand.tick(&mut store, later);
//! assert_eq!(store.dispatched, vec![ExpandHoverTop::expand(vec!["a"])]);
//!
//! // Dropping ends the drag; the expansion collapses.
//! store.state.drag_in_progress = false;
//! assert_eq!(expand.update(&mut store, later), Some(Step::Collapsed));
//! assert_eq!(store.state.expand_hover_top_path, None);
//! ```
//!
//! ## Logging
//!
//! Decisions and timer activity are reported through [`tracing`] at `debug` and `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod config;
pub mod debounce;
pub mod driver;
pub mod path;
pub mod policy;
pub mod trigger;
pub mod types;
