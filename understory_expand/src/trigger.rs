// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change filter: run the driver only when a policy input actually changed.
//!
//! ## Usage
//!
//! Hosts usually learn about state changes through a coarse "something changed" notification.
//! Re-running the driver on every one of them would restart the debounce delay on no-op ticks.
//! [`ChangeFilter::observe`] remembers the inputs the policy reads and reports whether any
//! of them differ from the previous observation.
//!
//! The alert is not tracked: it is only read when a due expansion fires. After a suppressed
//! fire the driver calls [`ChangeFilter::reset`] so the unchanged hover is evaluated again.
//!
//! ```
//! use understory_expand::trigger::ChangeFilter;
//! use understory_expand::types::HoverSnapshot;
//!
//! let mut filter = ChangeFilter::new();
//! let mut s: HoverSnapshot<u32> = HoverSnapshot::default();
//! assert!(filter.observe(&s));
//! assert!(!filter.observe(&s));
//! s.hovering_path = Some(vec![1, 2]);
//! assert!(filter.observe(&s));
//! ```

use alloc::vec::Vec;

use crate::types::{DropZone, HoverSnapshot};

/// Policy inputs seen at the last observation.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Inputs<K> {
    cursor: Option<Vec<K>>,
    hovering_path: Option<Vec<K>>,
    hover_zone: Option<DropZone>,
    expand_hover_top_path: Option<Vec<K>>,
    drag_in_progress: bool,
}

impl<K: Clone + PartialEq> Inputs<K> {
    fn capture(s: &HoverSnapshot<K>) -> Self {
        Self {
            cursor: s.cursor.clone(),
            hovering_path: s.hovering_path.clone(),
            hover_zone: s.hover_zone,
            expand_hover_top_path: s.expand_hover_top_path.clone(),
            drag_in_progress: s.drag_in_progress,
        }
    }

    fn matches(&self, s: &HoverSnapshot<K>) -> bool {
        self.drag_in_progress == s.drag_in_progress
            && self.hover_zone == s.hover_zone
            && self.hovering_path == s.hovering_path
            && self.expand_hover_top_path == s.expand_hover_top_path
            && self.cursor == s.cursor
    }
}

/// Detects changes to the snapshot fields the hover policy reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeFilter<K> {
    last: Option<Inputs<K>>,
}

impl<K> Default for ChangeFilter<K> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: Clone + PartialEq> ChangeFilter<K> {
    /// Create a filter that has observed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` and return whether any policy input changed since the last call.
    ///
    /// The first observation always counts as a change.
    pub fn observe(&mut self, snapshot: &HoverSnapshot<K>) -> bool {
        if self.last.as_ref().is_some_and(|last| last.matches(snapshot)) {
            return false;
        }
        self.last = Some(Inputs::capture(snapshot));
        true
    }

    /// Forget the last observation; the next [`observe`](Self::observe) reports a change.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
